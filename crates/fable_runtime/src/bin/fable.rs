//! Fable CLI entry point.

use fable_play::Game;
use fable_runtime::ReadlineConsole;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    world_file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.world_file.is_some() {
                    return Err("only one world file may be given".into());
                }
                config.world_file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("fable {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(path) = config.world_file else {
        print_help();
        return Ok(());
    };

    let world = fable_build::load(&path)?;
    let mut console = ReadlineConsole::new()?;
    let mut game = Game::new(world);
    game.run(&mut console)?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mFable\x1b[0m - Text adventure engine

\x1b[1mUSAGE:\x1b[0m
    fable [OPTIONS] <WORLD_FILE>

\x1b[1mARGUMENTS:\x1b[0m
    <WORLD_FILE>    World blueprint (JSON) to load and play

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information

\x1b[1mEXAMPLES:\x1b[0m
    fable world.json       Load world.json and start playing

\x1b[1mIN-GAME COMMANDS:\x1b[0m
    quit, exit         End the session
    Ctrl+D             End the session"
    );
}
