//! CLI dispatch: handles command-line flags before the TUI starts.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `false` for `RunTui` (continue into the TUI); the `Version`
/// command never returns.
pub fn run_cli_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::RunTui => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_falls_through() {
        assert!(!run_cli_command(CliCommand::RunTui));
    }
}
