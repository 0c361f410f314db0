use clap::{Parser, Subcommand};

use crate::cli::parse_number;

#[derive(Parser, Debug)]
#[command(multicall = true, name = "")]
pub struct PromptArgs {
    /// Prompt command
    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum PromptCommand {
    /// Compute the factorial of a value
    #[command(name = "fact", alias = "f", about = "Compute n!")]
    Fact {
        /// Value to compute the factorial of
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        n: i64,
    },
    /// Show every multiplication step, then the result
    #[command(
        name = "trace",
        alias = "t",
        about = "Show the running product for each step"
    )]
    Trace {
        /// Value to compute the factorial of
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        n: i64,
    },
    /// Show the result grouped, with its digit count and trailing zeros
    #[command(
        name = "summary",
        alias = "s",
        about = "Show n! with its digit count and trailing zeros"
    )]
    Summary {
        /// Value to compute the factorial of
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        n: i64,
    },
    /// Leave the prompt
    #[command(name = "quit", alias = "q", about = "Leave the prompt")]
    Quit,
}

impl PromptCommand {
    /// Parses one line of input. A bare number is a shorthand for `fact`.
    pub fn parse(line: &str) -> Result<Self, clap::Error> {
        if let Ok(n) = parse_number(line) {
            return Ok(PromptCommand::Fact { n });
        }

        PromptArgs::try_parse_from(line.split_whitespace())
            .map(|args| args.command)
    }
}
