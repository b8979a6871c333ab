use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chess_rules_engine::board::Move;
use chess_rules_engine::config::{ConfigError, EngineConfig, PlayerKind, USAGE};
use chess_rules_engine::game::{Game, GameStatus, SnapshotObserver};
use chess_rules_engine::logger;

/// Print the last known position before the default panic report.
fn install_panic_hook(snapshot: SnapshotObserver) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Some(state) = snapshot.try_latest() {
            eprintln!("last position: {}", state.to_fen());
        }
        default_hook(info);
    }));
}

fn run(game: &mut Game, config: &EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        writeln!(stdout, "\n{}", game.state())?;
        let status = game.status();
        let side = match status {
            GameStatus::InProgress {
                side_to_move,
                in_check,
            } => {
                if in_check {
                    writeln!(stdout, "{side_to_move} is in check")?;
                }
                side_to_move
            }
            _ => {
                writeln!(stdout, "{status}")?;
                return Ok(());
            }
        };

        match config.player(side) {
            PlayerKind::Engine => match game.play_engine(&config.search) {
                Ok((mv, result)) => writeln!(
                    stdout,
                    "{side} plays {mv} (score {}, {} nodes)",
                    result.score, result.nodes
                )?,
                Err(err) => {
                    writeln!(stdout, "{err}")?;
                    return Ok(());
                }
            },
            PlayerKind::Human => {
                write!(stdout, "{side} move: ")?;
                stdout.flush()?;
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                let text = line.trim();
                if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
                    return Ok(());
                }
                match text.parse::<Move>() {
                    Ok(mv) => {
                        if let Err(err) = game.play(mv) {
                            writeln!(stdout, "{err}")?;
                        }
                    }
                    Err(err) => writeln!(stdout, "{err}")?,
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = logger::init(config.log_level) {
        eprintln!("logger: {err}");
    }

    let snapshot = SnapshotObserver::new();
    install_panic_hook(snapshot.clone());

    let mut game = Game::new();
    game.add_observer(Box::new(snapshot));

    match run(&mut game, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    }
}
