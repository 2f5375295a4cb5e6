// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
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
use serde::Serialize;

use glucowatch_core::{MonitorCore, SharedMonitor};
use glucowatch_types::{SeverityBand, Update};

mod app;
mod assistant;
mod data;
mod events;
mod logging;
mod settings;
mod source;
mod ticker;
mod ui;

use app::{App, View};
use settings::Settings;
use source::{FileSource, ReadingSource, SimulatedSource};
use ticker::Ticker;

/// Readings taken by `--headless` when `--ticks` is not given.
const DEFAULT_HEADLESS_TICKS: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "glucowatch")]
#[command(about = "Terminal monitor for simulated real-time blood sugar readings")]
struct Args {
    /// Settings file (TOML). Defaults to ./glucowatch.toml if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time between readings (e.g., "5s", "500ms")
    #[arg(short, long)]
    interval: Option<String>,

    /// Seed for the simulated source, for reproducible runs
    #[arg(long, conflicts_with = "replay")]
    seed: Option<u64>,

    /// Replay readings from a file (one value per line, or an exported CSV)
    #[arg(short, long)]
    replay: Option<PathBuf>,

    /// Restart the replay from the top when it runs out
    #[arg(long = "loop", requires = "replay")]
    loop_replay: bool,

    /// Readings kept for the live chart
    #[arg(long)]
    window: Option<usize>,

    /// Readings kept per alert band
    #[arg(long)]
    ledger: Option<usize>,

    /// Upper bound of the Low band (mg/dL)
    #[arg(long)]
    low: Option<f64>,

    /// Lower bound of the High band (mg/dL)
    #[arg(long)]
    elevated: Option<f64>,

    /// Lower bound of the Critical band (mg/dL)
    #[arg(long)]
    critical: Option<f64>,

    /// Where the `e` key writes the CSV snapshot
    #[arg(long)]
    export_path: Option<PathBuf>,

    /// Start with the alert bell silenced
    #[arg(short, long)]
    mute: bool,

    /// Append diagnostic logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run without the TUI, printing one line per reading
    #[arg(long)]
    headless: bool,

    /// Number of readings to take in headless mode [default: 20]
    #[arg(long, requires = "headless")]
    ticks: Option<usize>,

    /// Print JSON lines instead of text (headless mode)
    #[arg(long, requires = "headless")]
    json: bool,

    /// Write the final window to this CSV file (headless mode)
    #[arg(short, long, requires = "headless")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(logging::LogTarget::select(
        args.log_file.as_deref(),
        args.headless,
    ))?;

    let mut settings = Settings::load(args.config.as_deref())?;
    apply_overrides(&mut settings, &args);
    settings.validate()?;

    let source = build_source(&args)?;
    tracing::info!(
        source = source.description(),
        window = settings.monitor.window_capacity,
        ledger = settings.monitor.ledger_capacity,
        "starting"
    );

    if args.headless {
        return run_headless(source, &settings, &args);
    }

    run_with_ticker(source, &settings)
}

/// Command-line flags take priority over the settings file and environment.
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(ref interval) = args.interval {
        settings.ui.interval = interval.clone();
    }
    if let Some(window) = args.window {
        settings.monitor.window_capacity = window;
    }
    if let Some(ledger) = args.ledger {
        settings.monitor.ledger_capacity = ledger;
    }
    if let Some(low) = args.low {
        settings.monitor.thresholds.low = low;
    }
    if let Some(elevated) = args.elevated {
        settings.monitor.thresholds.elevated = elevated;
    }
    if let Some(critical) = args.critical {
        settings.monitor.thresholds.critical = critical;
    }
    if let Some(ref path) = args.export_path {
        settings.ui.export_path = path.clone();
    }
    if args.mute {
        settings.ui.mute = true;
    }
}

fn build_source(args: &Args) -> Result<Box<dyn ReadingSource>> {
    if let Some(ref path) = args.replay {
        let source = FileSource::open(path)
            .with_context(|| format!("Failed to open replay file {}", path.display()))?
            .looping(args.loop_replay);
        return Ok(Box::new(source));
    }

    Ok(match args.seed {
        Some(seed) => Box::new(SimulatedSource::seeded(seed)),
        None => Box::new(SimulatedSource::new()),
    })
}

/// One headless output line.
#[derive(Serialize)]
struct ReadingLine<'a> {
    time: String,
    value: f64,
    band: SeverityBand,
    advice: Option<&'a str>,
}

impl<'a> From<&'a Update> for ReadingLine<'a> {
    fn from(update: &'a Update) -> Self {
        Self {
            time: update.reading.time_label(),
            value: update.reading.value,
            band: update.band(),
            advice: update.advice(),
        }
    }
}

/// Take `--ticks` readings back to back without a terminal UI.
fn run_headless(
    mut source: Box<dyn ReadingSource>,
    settings: &Settings,
    args: &Args,
) -> Result<()> {
    let mut core = MonitorCore::new(settings.monitor)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for _ in 0..args.ticks.unwrap_or(DEFAULT_HEADLESS_TICKS) {
        match core.tick(source.as_mut()) {
            Ok(update) => {
                if args.json {
                    serde_json::to_writer(&mut out, &ReadingLine::from(&update))?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}", format_line(&update))?;
                }
            }
            Err(e) => tracing::warn!(error = %e, "reading failed"),
        }
    }
    out.flush()?;

    if let Some(ref path) = args.export {
        let window = core.window_snapshot();
        glucowatch_core::export_csv(path, &window)?;
        tracing::info!(path = %path.display(), rows = window.len(), "exported window");
    }

    Ok(())
}

/// Text form of a headless line, e.g. `14:30:05  192.40 mg/dL  CRIT  Consult a doctor...`.
fn format_line(update: &Update) -> String {
    let mut line = format!(
        "{}  {:>6.2} {}  {:<4}",
        update.reading.time_label(),
        update.reading.value,
        glucowatch_types::UNIT,
        update.band().symbol(),
    );
    if let Some(advice) = update.advice() {
        line.push_str("  ");
        line.push_str(advice);
    }
    line
}

/// Run the TUI with a background ticker on a tokio runtime
fn run_with_ticker(source: Box<dyn ReadingSource>, settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let monitor = SharedMonitor::new(MonitorCore::new(settings.monitor)?);
    let ticker = Ticker::spawn(monitor.clone(), source, settings.interval()?);

    let app = App::new(monitor, ticker, ui::Theme::auto_detect())
        .with_export_path(settings.ui.export_path.clone())
        .with_muted(settings.ui.mute);

    run_tui(app)
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
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
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 16;

    while app.running {
        app.pump();
        if app.take_alert().is_some() {
            ring_bell(terminal.backend_mut())?;
        }

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
                let top = (area.height / 2).saturating_sub(2);
                let centered = ratatui::layout::Rect::new(0, top, area.width, 5.min(area.height));
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.current_view {
                View::Live => ui::live::render(frame, app, chunks[2]),
                View::History => ui::history::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            if app.show_chat {
                ui::chat::render_overlay(frame, app, area);
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

/// Audible alert in place of speech.
fn ring_bell<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}
