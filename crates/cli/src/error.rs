// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.

use thiserror::Error;

/// Errors produced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Greeting module name was empty or whitespace.
    #[error("module name must not be empty")]
    EmptyModuleName,

    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
