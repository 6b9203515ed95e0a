// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Context;
use clap::Parser;

use altcase::cli::{HelloCli, run_hello};

fn main() -> anyhow::Result<()> {
    altcase::logging::init();
    let cli = HelloCli::parse();
    let mut stdout = std::io::stdout().lock();
    run_hello(&cli, &mut stdout).context("failed to print greeting")
}
