// src/main.rs

use std::io;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use palprimes::benchmark_cli;
use palprimes::cli::{self, Cli, Command};
use palprimes::config::PalprimeConfig;
use palprimes::Result;

fn main() {
    let args = Cli::parse();

    // Config comes first so that it can set the log level
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let env = Env::default()
        .filter_or("PALPRIMES_LOG", config.log_level.as_str())
        .write_style_or("PALPRIMES_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();
    debug!("Loaded configuration: {:?}", config);

    if let Err(err) = run(&args, &config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn load_config(args: &Cli) -> Result<PalprimeConfig> {
    let config = match &args.config {
        Some(path) => PalprimeConfig::load_from_file(path)?,
        None => PalprimeConfig::load()?,
    };
    Ok(config)
}

fn run(args: &Cli, config: &PalprimeConfig) -> Result<()> {
    if let Some(Command::Benchmark { digit_counts }) = &args.command {
        benchmark_cli::run_benchmarks(digit_counts, config)?;
        return Ok(());
    }

    let range = match args.range() {
        Some(range) => range?,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            cli::prompt_for_range(&mut input, &mut output)?
        }
    };

    let report = cli::execute_search(&range, config);
    println!("{}", report);
    Ok(())
}
