use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use one_sample_ttest::form::Form;
use one_sample_ttest::input;
use one_sample_ttest::report;
use one_sample_ttest::testing::{Alternative, DEFAULT_ALPHA, DEFAULT_NULL_MEAN};

#[derive(Parser, Debug)]
#[command(author, version, about = "One-sample Student's t-test calculator")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the calculator form on the terminal (default)
    Interactive,

    /// Run a single calculation and print the result
    Calculate {
        /// Sample values separated by commas, e.g. "10, 12, 9, 11"
        #[arg(long, allow_hyphen_values = true)]
        data: String,

        /// Null hypothesis mean (μ₀)
        #[arg(long, default_value_t = DEFAULT_NULL_MEAN, value_parser = input::parse_null_mean, allow_hyphen_values = true)]
        null_mean: f64,

        /// Significance level (α), between 0.01 and 0.10
        #[arg(long, default_value_t = DEFAULT_ALPHA, value_parser = input::parse_alpha)]
        alpha: f64,

        /// Alternative hypothesis: two-sided, greater or less
        #[arg(long, default_value_t = Alternative::TwoSided)]
        alternative: Alternative,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = Args::parse();

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let mut form = Form::default();
            form.run(io::stdin().lock(), io::stdout().lock())
                .context("terminal session failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Calculate {
            data,
            null_mean,
            alpha,
            alternative,
        } => {
            let form = Form {
                data,
                null_mean,
                alpha,
                alternative,
            };
            match form.calculate() {
                Ok(result) => {
                    print!("{}", report::render(&result));
                    Ok(ExitCode::SUCCESS)
                }
                Err(_) => {
                    eprintln!("{}", report::INVALID_INPUT_WARNING);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
