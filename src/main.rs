use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::File,
    io,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use itsatui::config::Config;
use itsatui::scheduler::{SystemClock, Tick};
use itsatui::{handlers, ui, utils, App};

/// ITSA SJCEM society page in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/itsatui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (gg/G, ^D/U, ^F/B)
    #[arg(long)]
    vim: bool,

    /// Skip the loading splash
    #[arg(long)]
    no_splash: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

/// How often the input reader checks whether the UI has gone away
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Install the file logger. Without --debug nothing is logged, so the
/// terminal stays clean.
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = File::create(&path)
        .with_context(|| format!("Failed to create debug log {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    info!(path = %path.display(), "debug logging enabled");
    Ok(())
}

/// Determine the config file path with fallback logic
///
/// Unlike an explicit `--config`, a missing default file is not an error:
/// the built-in page is used instead.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/itsatui/config.yaml
    if let Some(config_path) = utils::get_default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Enter raw mode and the alternate screen. On failure the terminal is put
/// back before the error is returned.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
        .context("Failed to set up terminal");
    if terminal.is_err() {
        restore_terminal();
    }
    terminal
}

/// Best-effort restore used on the setup error path
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(%err, "failed to leave alternate screen");
    }
}

/// Read terminal events on a blocking thread and forward them to the UI
/// loop. Stops once the receiver is dropped.
fn spawn_input_reader(tx: UnboundedSender<Event>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(%err, "failed to poll terminal events");
                    break;
                }
            }
        }
        debug!("input reader stopped");
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => {
            info!("no config file found; using built-in page");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.no_splash {
        config.splash = false;
    }

    let mut app = App::new(&config, SystemClock::new());

    // Setup terminal
    let mut terminal = setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx);

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, &mut rx).await;

    // Closing the channel stops the reader at its next poll
    drop(rx);
    if let Err(err) = reader.await {
        warn!(%err, "input reader panicked");
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut UnboundedReceiver<Event>,
) -> Result<()> {
    // Size the page to the terminal; an error here still reaches cleanup
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        // Fire due timers, then always render (Elm Architecture approach)
        app.tick();
        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_quit {
            break;
        }

        // Sleep until input arrives, a timer is due or the next frame
        tokio::select! {
            event = events.recv() => match event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key);
                }
                Some(Event::Resize(width, height)) => app.resize(width, height),
                Some(_) => {}
                None => break,
            },
            _ = tokio::time::sleep(app.wake_in()) => {}
        }
    }

    Ok(())
}
