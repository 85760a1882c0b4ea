use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{error, info, warn};
use museum_heist::assets::{bundled_assets_dir, AssetState};
use museum_heist::constants::INPUT_POLL_MS;
use museum_heist::heist::{process_input, tick_heist, InputOutcome};
use museum_heist::input::map_event;
use museum_heist::ui::draw_ui;
use museum_heist::ui::game_common::WorldMapping;
use museum_heist::utils::{build_info, logging, paths};
use museum_heist::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Command-line overrides.
#[derive(Debug, Default)]
struct CliArgs {
    assets_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_usage() {
    println!("Museum Heist: WiFi Gone\n");
    println!("Usage: museum-heist [options]\n");
    println!("Options:");
    println!("  --assets <dir>   Load sprites from <dir>");
    println!("  --config <file>  Read settings from <file>");
    println!("  --seed <n>       Seed the obstacle generator");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn fail_usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'museum-heist --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliArgs {
    let mut cli = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--assets" => match args.next() {
                Some(dir) => cli.assets_dir = Some(PathBuf::from(dir)),
                None => fail_usage("--assets needs a directory"),
            },
            "--config" => match args.next() {
                Some(file) => cli.config_path = Some(PathBuf::from(file)),
                None => fail_usage("--config needs a file"),
            },
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => cli.seed = Some(seed),
                None => fail_usage("--seed needs a number"),
            },
            other => fail_usage(&format!("Unknown option: {}", other)),
        }
    }
    cli
}

fn main() -> io::Result<()> {
    let cli = parse_args();

    // Logging is best effort; the game runs without it
    match paths::log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file_logger(&path) {
                eprintln!("Warning: could not open log file {}: {}", path.display(), e);
            }
        }
        Err(e) => eprintln!("Warning: no log directory: {}", e),
    }
    info!("[Heist] Starting {}", build_info::version_line());

    let config_path = match cli.config_path.clone() {
        Some(path) => Some(path),
        None => paths::default_config_path().ok(),
    };
    let mut config = match &config_path {
        Some(path) => {
            let config = GameConfig::load(path)?;
            info!("[Config] Using {}", path.display());
            config
        }
        None => {
            warn!("[Config] No config directory, using defaults");
            GameConfig::default()
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let assets_dir = cli
        .assets_dir
        .or_else(|| config.assets_dir.clone())
        .unwrap_or_else(bundled_assets_dir);

    let mut rng = match config.seed {
        Some(seed) => {
            info!("[Heist] Seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, assets_dir, &mut rng);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("[Heist] Exited with error: {}", e);
    }
    result
}

/// Frame loop: poll input, advance the simulation, draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
    assets_dir: PathBuf,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut game = config.new_game(rng);
    let mut assets = AssetState::start(assets_dir);
    let mut last_tick = Instant::now();

    loop {
        // Asset batch finished this frame?
        if assets.poll() {
            match &assets {
                AssetState::Ready(_) => game.assets_ready = true,
                AssetState::Failed(e) => error!("[Assets] {}", e),
                AssetState::Loading(_) => {}
            }
        }

        terminal.draw(|frame| draw_ui(frame, &game, &assets))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let event = event::read()?;
            let mapping = WorldMapping::for_terminal(terminal.size()?, game.viewport);
            if let Some(input) = map_event(&event, &mapping) {
                if process_input(&mut game, input) == InputOutcome::Quit {
                    info!(
                        "[Heist] Quit on {:?} at {} points (best {})",
                        game.screen, game.points, game.best_points
                    );
                    break;
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_tick).as_millis() as u64;
        last_tick = now;
        tick_heist(&mut game, dt_ms, rng);
    }

    Ok(())
}
