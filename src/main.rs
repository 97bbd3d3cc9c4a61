use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use php_expr::{Error, fmt::to_source, parse_complete, parse_source};

#[derive(Parser)]
#[command(name = "php-expr")]
#[command(about = "Parse PHP-like expressions and show how they nest", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the structural dump of each expression
    Dump(InputArgs),

    /// Print each expression back as normalised source
    Fmt(InputArgs),

    /// Only report whether each expression parses
    Check(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Expression source (ignored when --file is given)
    expression: Option<String>,

    /// Read expressions from a file, one per line
    #[arg(short, long)]
    file: Option<String>,

    /// Accept tokens after the expression instead of reporting them
    #[arg(long)]
    allow_trailing: bool,

    /// When to colour error output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl InputArgs {
    fn expressions(&self) -> Result<Vec<String>> {
        if let Some(path) = &self.file {
            let content =
                fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
            return Ok(content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect());
        }

        match &self.expression {
            Some(expression) => Ok(vec![expression.clone()]),
            None => anyhow::bail!("no expression given; pass one or use --file"),
        }
    }

    fn parse(&self, source: &str) -> Result<php_expr::ast::Node, Error> {
        if self.allow_trailing {
            parse_source(source)?.ok_or(Error::NoExpression(None))
        } else {
            parse_complete(source)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let args = match &cli.command {
        Commands::Dump(args) | Commands::Fmt(args) | Commands::Check(args) => args,
    };

    match args.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    let mut failures = 0;
    for source in args.expressions()? {
        match args.parse(&source) {
            Ok(node) => match &cli.command {
                Commands::Dump(_) => println!("{}", node.dump()),
                Commands::Fmt(_) => println!("{}", to_source(&node)),
                Commands::Check(_) => println!("{} {}", "ok".green(), source),
            },
            Err(err) => {
                failures += 1;
                eprintln!("{} {}", "error:".red().bold(), source);
                eprintln!("{}", err);
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
