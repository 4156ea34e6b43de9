use vestibule::app::App;
use vestibule::cli::{parse_args, run_cli_command};
use vestibule::config::Config;
use vestibule::{logging, ui};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle CLI flags before any terminal setup
    let command = parse_args(std::env::args());
    run_cli_command(command);

    let config = Config::load()?;
    if let Some(ref path) = config.log_file {
        logging::init(path)?;
    }
    info!(latency_ms = config.latency_ms, "starting vestibule");

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config);

    // Capture initial terminal dimensions
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Main event loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    restore_terminal(&mut terminal)?;

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<_> = match app.message_rx.take() {
        Some(rx) => rx,
        None => return Ok(()),
    };

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events, async completions, and the animation tick
        let timeout = tokio::time::sleep(app.config.tick_rate());

        tokio::select! {
            // Animation tick (spinner while an attempt is in flight)
            _ = timeout => {
                app.tick();
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Global quit binding
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                                return Ok(());
                            }
                            app.handle_key(key);
                        }
                        _ => {}
                    }
                }
            }

            // Completions published by background tasks
            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
