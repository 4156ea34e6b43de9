//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags fall through to the TUI.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            _ => {}
        }
    }
    CliCommand::RunTui
}
