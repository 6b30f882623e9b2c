// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod config;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use config::Settings;
use data::DashboardStats;
use source::{DataSource, HttpSource};

#[derive(Parser, Debug)]
#[command(name = "pulsewatch")]
#[command(about = "Terminal dashboard for monitoring HTTP service health")]
struct Args {
    /// Backend health endpoint URL (overrides the saved configuration;
    /// not persisted)
    #[arg(short, long)]
    url: Option<String>,

    /// Refresh interval in seconds
    #[arg(short, long, default_value = "30")]
    refresh: u64,

    /// Path to the settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fetch once, write the normalized snapshot to a JSON file, and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path)?;
    let backend_url = args.url.clone().unwrap_or(settings.backend_url);
    let interval = Duration::from_secs(args.refresh);

    // The TUI loop is synchronous; the runtime hosts the polling task.
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return rt.block_on(export_to_file(&backend_url, export_path));
    }

    let source = Box::new(HttpSource::spawn(&backend_url, interval));
    run_tui(source, backend_url, settings_path)
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, backend_url: String, settings_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source, backend_url, settings_path);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 50;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        // Pick up whatever the poll task has produced since the last frame
        app.pump_source();

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(4), // Stats panel
                Constraint::Min(7),    // Service cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::stats::render(frame, app, chunks[1]);
            ui::cards::render(frame, app, chunks[2]);
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render settings overlay if active
            if app.show_settings {
                ui::settings::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Fetch once and export the normalized snapshot to a JSON file
async fn export_to_file(url: &str, export_path: &Path) -> Result<()> {
    let outcome = source::fetch_once(url).await;
    let stats = DashboardStats::from_services(&outcome.services);

    let export = serde_json::json!({
        "url": outcome.url,
        "error": outcome.error,
        "stats": stats,
        "services": outcome.services,
    });

    std::fs::write(export_path, serde_json::to_string_pretty(&export)?)?;
    println!("Exported health snapshot to: {}", export_path.display());
    Ok(())
}
