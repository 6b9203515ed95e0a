// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::process::Command;

/// Returns a Command configured to run the altcase binary
pub fn altcase_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("altcase"));
    cmd.env_remove("ALTCASE_LOG");
    cmd
}

/// Returns a Command configured to run the hello binary
pub fn hello_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hello"));
    cmd.env_remove("ALTCASE_LOG")
        .env_remove("HELLO_MODULE")
        .env_remove("HELLO_DEFAULT_SENDER");
    cmd
}
