use std::io;

use clap::Parser;

use ascii_image::cli::{self, Args, Command, CommandError};
use ascii_image::config::Config;
use ascii_image::session::Session;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load config. An explicitly named file must load; a broken default file
/// only produces a warning.
fn load_config(args: &Args) -> Result<Config, CommandError> {
    match args.config.as_deref() {
        Some(path) => Ok(Config::load(Some(path))?),
        None => match Config::load(None) {
            Ok(c) => Ok(c),
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Ok(Config::default())
            }
        },
    }
}

fn run(args: Args) -> Result<(), CommandError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Config { action } => {
            cli::handle_config_action(action, args.config.as_deref(), &mut out)
        }
        Command::Convert {
            ref input,
            ref output,
            quiet,
            ref render,
        } => {
            let config = load_config(&args)?;
            cli::run_convert(input, output.as_deref(), quiet, render, &config, &mut out)
        }
        Command::Interactive { ref render } => {
            let config = load_config(&args)?;
            let columns = cli::resolve_columns(render, &config)?;
            let session = Session::new(cli::resolve_settings(render, &config)?);
            log::info!("Interactive session at {} columns", columns);

            let mut app = cli::Interactive::new(session, columns);
            app.run(io::stdin().lock(), &mut out)?;
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
