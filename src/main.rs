use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use photosweep_app::App;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    setup_logging()?;

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging() -> Result<()> {
    use std::env;

    let log_dir = env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("photosweep.log");

    eprintln!("Logging to: {}", log_path.display());

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("photosweep=debug,info"));

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .init();

    info!("Starting PhotoSweep...");
    info!("Log file: {}", log_path.display());

    Ok(())
}

async fn run() -> Result<()> {
    if !io::stdout().is_terminal() {
        eprintln!("Error: PhotoSweep must be run in a terminal");
        std::process::exit(1);
    }

    // Fail before touching the terminal so the error stays readable.
    let library = std::env::args_os().nth(1).map(PathBuf::from);
    let mut app = App::new(library).await?;
    info!(
        "Library folder: {:?}, dry run: {}",
        app.settings.library_folder, app.settings.dry_run
    );
    app.start();
    let app = Arc::new(RwLock::new(app));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Runtime error: {:?}", err);
        return Err(err);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: Arc<RwLock<App>>) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        {
            let mut app = app.write().await;
            terminal.draw(|f| photosweep_ui::draw(f, &mut app))?;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut app = app.write().await;

                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            info!("User forced quit");
                            return Ok(());
                        }
                        _ => {
                            app.on_key(key).await?;
                            if app.should_quit {
                                info!("User requested quit");
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let mut app = app.write().await;
            app.on_tick()?;
            last_tick = Instant::now();
        }
    }
}
