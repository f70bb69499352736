//! Interactive front end for bobaBot.
//!
//! Reads one command per line from stdin and prints the feedback.
//!
//! ```sh
//! bobabot
//! bobabot --data shop/customers.json --log-level info
//! bobabot --config bobabot.config.json
//! ```

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bobabot_core::command::{FindCommand, ListCommand};
use bobabot_core::{
    init_logging, usage_overview, AppConfig, CommandResult, JsonCustomerStore, LogicManager,
};
use clap::Parser;
use log::info;

const DEFAULT_CONFIG_FILE: &str = "bobabot.config.json";

/// bobaBot: track customers and their loyalty reward points.
#[derive(Parser, Debug)]
#[command(name = "bobabot", version, about)]
struct Cli {
    /// Path to the configuration file (JSON).
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the customer data file.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the log directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bobabot: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = log_dir;
    }
    config.validate()?;

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("bobabot: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok history_capacity={}",
        config.history_capacity
    );

    let store = JsonCustomerStore::new(config.data_file.clone());
    let mut logic = LogicManager::with_history_capacity(store, config.history_capacity);
    if let Some(message) = logic.startup_warning() {
        println!("{message}");
    }
    println!("Welcome to bobaBot! Type `help` to see all commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                print_result(&result, &logic, &line);
                if result.exit {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
        stdout.flush()?;
    }

    info!(
        "event=cli_stop module=cli status=ok count={}",
        logic.registry().len()
    );
    Ok(())
}

fn print_result(result: &CommandResult, logic: &LogicManager<JsonCustomerStore>, line: &str) {
    println!("{}", result.feedback);
    if result.show_help {
        println!("{}", usage_overview());
    }
    let word = line.split_whitespace().next().unwrap_or_default();
    if word == ListCommand::WORD || word == FindCommand::WORD {
        for (index, customer) in logic.filtered_customers().iter().enumerate() {
            println!("{}. {customer}", index + 1);
        }
    }
}
