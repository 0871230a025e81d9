//! linediff - line-by-line document comparison
//!
//! Binary entry point: non-interactive output formats or the TUI viewer.

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use linediff::app::App;
use linediff::config::{Cli, Config, OutputFormat};
use linediff::engine;
use linediff::model::Document;
use linediff::{logging, output};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Cli::parse().into_config()?;
    logging::init(config.log_file.as_deref())?;

    let original_name = config.original.display_name();
    let modified_name = config.modified.display_name();
    let original = Document::from_text(&config.original.load()?);
    let modified = Document::from_text(&config.modified.load()?);

    if config.output != OutputFormat::Tui {
        return write_output(&config, &original, &modified, &original_name, &modified_name);
    }

    let app = App::new(
        original_name,
        original,
        modified_name,
        modified,
        config.algorithm,
        config.mode,
    );

    let terminal = ratatui::init();
    // Restore the terminal on every exit path, including panics
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, app)
}

/// Print a non-interactive format to stdout.
fn write_output(
    config: &Config,
    original: &Document,
    modified: &Document,
    original_name: &str,
    modified_name: &str,
) -> color_eyre::Result<()> {
    let result = engine::diff_documents_with(original, modified, config.algorithm);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.output {
        OutputFormat::Plain => output::write_plain(&mut out, &result, config.color)?,
        OutputFormat::Stat => output::write_stat(&mut out, &result, original_name, modified_name)?,
        OutputFormat::Json => output::write_json(&mut out, &result)?,
        OutputFormat::Tui => {}
    }

    out.flush()?;
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications disappear without input.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
