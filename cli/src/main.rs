mod args;
mod commands;
mod config;
mod logging;

use clap::{CommandFactory, Parser};
use std::process;

use args::{Cli, Operation};
use config::{ToolConfig, LOG_ENV};

/// Exit status for an unrecognized operation letter.
const EXIT_UNKNOWN_OP: i32 = -1;
/// Exit status for missing arguments or bad settings.
const EXIT_USAGE: i32 = 2;

fn main() {
    process::exit(run(Cli::parse()));
}

fn run(cli: Cli) -> i32 {
    let Some(raw_op) = cli.op.as_deref() else {
        print_usage();
        return 0;
    };

    let Some(op) = Operation::parse(raw_op) else {
        println!("Unknown operation: {raw_op}");
        return EXIT_UNKNOWN_OP;
    };

    let config = match ToolConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {e:#}");
            return EXIT_USAGE;
        }
    };
    logging::init(&config.log_filter);
    if let Some(rejected) = &config.rejected_log_filter {
        tracing::warn!(
            filter = %rejected,
            fallback = %config.log_filter,
            "invalid {} directive, using fallback",
            LOG_ENV
        );
    }

    let result = match (op, cli.input.as_deref(), cli.output.as_deref()) {
        (Operation::Inspect, Some(input), _) => commands::inspect(input),
        (Operation::Compress, Some(input), Some(output)) => commands::compress(input, output, &config),
        (Operation::Decompress, Some(input), Some(output)) => commands::decompress(input, output, &config),
        _ => {
            print_usage();
            return EXIT_USAGE;
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let kind = e.kind();
            tracing::debug!(kind = kind.as_str(), "operation failed");
            println!("Error: {e}");
            kind.exit_code()
        }
    }
}

fn print_usage() {
    // Only fails if stdout is closed, and then there is nobody to tell.
    let _ = Cli::command().print_help();
    println!();
}
