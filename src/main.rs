mod ui;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use skyward::build_info;
use skyward::core::constants::LOG_FILE;
use skyward::utils::logging::init_file_logging;
use skyward::utils::persistence::data_dir;
use skyward::{
    Driver, GameConfig, GameSession, HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore,
    Playfield, TickClock,
};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use ui::game_scene::playfield_for;
use ui::TerminalPresenter;

type GameDriver<B> = Driver<Box<dyn HighScoreStore>, StdRng, TerminalPresenter<B>>;

/// Player input after key/mouse decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Jump,
    Reset,
    Quit,
}

#[derive(Debug, Default)]
struct CliArgs {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn print_help() {
    println!("Skyward - terminal gap-pipe arcade game\n");
    println!("Usage: skyward [options]\n");
    println!("Options:");
    println!("  --seed <n>       Deterministic pipe layout");
    println!("  --config <path>  Load tuning from a JSON file");
    println!("  --version        Show version information");
    println!("  --help           Show this help message\n");
    println!("Controls: Space/Up/Enter/W/K or left click to flap, R to restart, Q/Esc to quit.");
}

fn exit_with_usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'skyward --help' for usage.");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--seed" => {
                let value = args.get(i + 1).and_then(|v| v.parse().ok());
                match value {
                    Some(seed) => cli.seed = Some(seed),
                    None => exit_with_usage_error("--seed expects a non-negative integer"),
                }
                i += 1;
            }
            "--config" => {
                match args.get(i + 1) {
                    Some(path) => cli.config_path = Some(PathBuf::from(path)),
                    None => exit_with_usage_error("--config expects a path"),
                }
                i += 1;
            }
            other => exit_with_usage_error(&format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    cli
}

fn decode_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w' | 'W' | 'k' | 'K') => {
            Some(Command::Jump)
        }
        KeyCode::Char('r' | 'R') => Some(Command::Reset),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn open_high_score_store() -> Box<dyn HighScoreStore> {
    match JsonHighScoreStore::in_data_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "high score file unavailable, scores will not persist");
            Box::new(MemoryHighScoreStore::default())
        }
    }
}

fn current_field<B: Backend>(driver: &GameDriver<B>) -> io::Result<Playfield> {
    let size = driver.presenter().terminal().size()?;
    Ok(playfield_for(size))
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);

    // Logging is best-effort; the game runs without it.
    match data_dir() {
        Ok(dir) => {
            if let Err(e) = init_file_logging(&dir.join(LOG_FILE)) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let config = cli
        .config_path
        .or_else(GameConfig::default_path)
        .map(|path| GameConfig::load_or_default(&path))
        .unwrap_or_default();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = open_high_score_store();
    info!(version = %build_info::version_line(), seed = ?cli.seed, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let field = playfield_for(terminal.size()?);
    let tick_interval_ms = config.tick_interval_ms;
    let session = GameSession::new(config, store, rng, field);
    let mut driver = Driver::new(session, TerminalPresenter::new(terminal));

    let result = run(&mut driver, tick_interval_ms);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    driver.presenter_mut().terminal_mut().show_cursor()?;

    info!(high_score = driver.session().high_score(), "exiting");
    result
}

/// Fixed-step loop: wait for input until the next tick is due, apply any
/// command, then run the due ticks.
fn run<B: Backend>(driver: &mut GameDriver<B>, tick_interval_ms: u64) -> io::Result<()> {
    let mut clock = TickClock::new(tick_interval_ms);
    let mut last = Instant::now();
    driver.refresh()?;

    loop {
        if event::poll(clock.until_next_tick())? {
            let command = match event::read()? {
                Event::Key(key) => decode_key(key),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    Some(Command::Jump)
                }
                Event::Resize(_, _) => {
                    driver.refresh()?;
                    None
                }
                _ => None,
            };

            match command {
                Some(Command::Jump) => {
                    let field = current_field(driver)?;
                    driver.on_jump(field)?;
                }
                Some(Command::Reset) => {
                    let field = current_field(driver)?;
                    driver.on_reset(field)?;
                }
                Some(Command::Quit) => return Ok(()),
                None => {}
            }
        }

        let now = Instant::now();
        let due = clock.advance(now - last);
        last = now;
        if due > 0 {
            // Ignored mid-run; the driver keeps the field the run started with.
            let field = current_field(driver)?;
            for _ in 0..due {
                driver.on_tick(field)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_decode_key_ignores_case() {
        for (lower, upper, command) in [
            ('w', 'W', Command::Jump),
            ('k', 'K', Command::Jump),
            ('r', 'R', Command::Reset),
            ('q', 'Q', Command::Quit),
        ] {
            assert_eq!(decode_key(press(KeyCode::Char(lower))), Some(command));
            assert_eq!(
                decode_key(KeyEvent::new(KeyCode::Char(upper), KeyModifiers::SHIFT)),
                Some(command)
            );
        }
    }

    #[test]
    fn test_decode_key_jump_and_quit_keys() {
        assert_eq!(decode_key(press(KeyCode::Char(' '))), Some(Command::Jump));
        assert_eq!(decode_key(press(KeyCode::Up)), Some(Command::Jump));
        assert_eq!(decode_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(decode_key(press(KeyCode::Char('x'))), None);
    }
}
