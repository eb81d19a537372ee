use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use hovertip::app::App;
use hovertip::config::{self, Config};
use hovertip::popper::Placement;

/// Poll interval while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Toolbar of buttons with delayed tooltips
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Milliseconds the pointer must rest on a button before its tooltip shows
    #[arg(long, value_name = "MS")]
    show_delay: Option<u64>,

    /// Milliseconds before a tooltip hides once the pointer leaves
    #[arg(long, value_name = "MS")]
    hide_delay: Option<u64>,

    /// Preferred placement, e.g. "bottom" or "right-start"
    #[arg(long, value_name = "PLACEMENT")]
    placement: Option<Placement>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    /// Flags win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.show_delay {
            config.tooltip.show_delay_ms = ms;
        }
        if let Some(ms) = self.hide_delay {
            config.tooltip.hide_delay_ms = ms;
        }
        if let Some(placement) = self.placement {
            config.tooltip.placement = placement;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    args.apply(&mut config);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = run(terminal, App::new(&config));

    execute!(stdout(), DisableMouseCapture, DisableFocusChange)?;
    ratatui::restore();

    result
}

/// Logs go to a file so they do not tear the alternate screen
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("hovertip.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    log::info!("logging to {}", path.display());
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let started = Instant::now();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app
            .time_to_next_deadline(started.elapsed())
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            // Catch up first so new requests are timed from the right instant
            app.tick(started.elapsed());
            app.handle_event(event::read()?);
        }
        app.tick(started.elapsed());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
