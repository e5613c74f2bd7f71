use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use numexpr::{ParseError, ParsedExpression};
use rayon::prelude::*;
use serde::Serialize;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// What to print for every successfully parsed expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The evaluated value
    Value,
    /// The canonical rendering of the parsed tree
    Description,
    /// A JSON object with the input, its serialized form and its value
    Json,
}

/// numexpr - Evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "numexpr")]
#[command(about = "Parse arithmetic expressions and print their value or canonical form")]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate (read from standard input, one per line, when omitted)
    pub expressions: Vec<String>,

    /// Output format (default: value)
    #[arg(short, long, value_enum, default_value = "value")]
    pub output: OutputFormat,

    /// Stop at the first expression that fails to parse
    #[arg(long)]
    pub fail_fast: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expressions: Vec<String>,
    pub output: OutputFormat,
    pub fail_fast: bool,
    pub log_level: LogLevel,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    expression: &'a ParsedExpression,
    value: f64,
}

/// Read one expression per line, skipping blank lines
fn read_expressions(input: impl BufRead) -> io::Result<Vec<String>> {
    input
        .lines()
        .filter(|line| !matches!(line, Ok(text) if text.trim().is_empty()))
        .collect()
}

fn config_from_args(args: CliArgs, input: impl BufRead) -> Result<CliConfig> {
    let expressions = if args.expressions.is_empty() {
        read_expressions(input).context("Failed to read expressions from standard input")?
    } else {
        args.expressions
    };

    if expressions.is_empty() {
        bail!("No expressions given");
    }

    Ok(CliConfig {
        expressions,
        output: args.output,
        fail_fast: args.fail_fast,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args, io::stdin().lock())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Parse every expression independently; results keep the input order
pub fn parse_all(expressions: &[String]) -> Vec<Result<ParsedExpression, ParseError>> {
    expressions
        .par_iter()
        .map(|text| ParsedExpression::parse(text))
        .collect()
}

/// Format one parsed expression for output
pub fn render(input: &str, expression: &ParsedExpression, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Value => Ok(format!("{:?}", expression.value())),
        OutputFormat::Description => Ok(expression.description()),
        OutputFormat::Json => serde_json::to_string(&Report {
            input,
            expression,
            value: expression.value(),
        })
        .context("Failed to encode result as JSON"),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Evaluating {} expression(s)", config.expressions.len());

    let results = parse_all(&config.expressions);
    let mut failures = 0;

    for (text, result) in config.expressions.iter().zip(results) {
        match result {
            Ok(expression) => println!("{}", render(text, &expression, config.output)?),
            Err(err) => {
                warn!("Failed to parse '{}'", text);
                eprintln!("{}: {}", text, err);
                failures += 1;
                if config.fail_fast {
                    break;
                }
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} expression(s) could not be parsed",
            failures,
            config.expressions.len()
        );
    }

    Ok(())
}
