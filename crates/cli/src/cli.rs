// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive, and the command bodies for both binaries.

use std::io::Write;

use clap::Parser;

use crate::alternate::{DEFAULT_TEXT, alternate_case};
use crate::error::Result;
use crate::greeting::{DEFAULT_MODULE, DEFAULT_SENDER, Greeting, sender_from_args};

/// Alternate the case of every character: even positions lower, odd positions upper
#[derive(Parser, Debug)]
#[command(name = "altcase")]
#[command(version, about, long_about = None)]
pub struct AltcaseCli {
    /// Text to transform, used verbatim
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Extra arguments after TEXT, accepted and ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

impl AltcaseCli {
    /// The input text, or [`DEFAULT_TEXT`] when none was given.
    pub fn input(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_TEXT)
    }
}

/// Print a greeting from a module to everyone named on the command line
#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(version, about, long_about = None)]
pub struct HelloCli {
    /// Names to greet from (joined with " and ")
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Module name printed before the greeting
    #[arg(long, env = "HELLO_MODULE", default_value = DEFAULT_MODULE)]
    pub module: String,

    /// Sender used when no names are given
    #[arg(long, env = "HELLO_DEFAULT_SENDER", default_value = DEFAULT_SENDER)]
    pub default_sender: String,
}

/// Transform the input and write it, newline-terminated, to `out`.
pub fn run_altcase(cli: &AltcaseCli, out: &mut impl Write) -> Result<()> {
    let input = cli.input();
    tracing::debug!(default = cli.text.is_none(), "input: {:?}", input);
    if !cli.rest.is_empty() {
        tracing::debug!("ignoring {} extra argument(s)", cli.rest.len());
    }
    let output = alternate_case(input);
    writeln!(out, "{}", output)?;
    Ok(())
}

/// Render the greeting and write it, newline-terminated, to `out`.
pub fn run_hello(cli: &HelloCli, out: &mut impl Write) -> Result<()> {
    let sender = sender_from_args(&cli.names, &cli.default_sender);
    tracing::debug!("module: {:?}, sender: {:?}", cli.module, sender);
    let greeting = Greeting::new(cli.module.as_str(), sender)?;
    writeln!(out, "{}", greeting.render())?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
