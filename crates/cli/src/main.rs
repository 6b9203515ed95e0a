// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Context;
use clap::Parser;

use altcase::cli::{AltcaseCli, run_altcase};

fn main() -> anyhow::Result<()> {
    altcase::logging::init();
    let cli = AltcaseCli::parse();
    let mut stdout = std::io::stdout().lock();
    run_altcase(&cli, &mut stdout).context("failed to write output")
}
