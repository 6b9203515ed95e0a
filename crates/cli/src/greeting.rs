// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greeting rendered by the `hello` binary.
//!
//! Prints `"{module}: Hello from {sender}!"`, where the sender is either a
//! fixed default or every name passed on the command line joined with `" and "`.

use crate::error::{Error, Result};

/// Default module name.
pub const DEFAULT_MODULE: &str = "hello";

/// Default sender when no names are given.
pub const DEFAULT_SENDER: &str = "Hello";

/// Separator placed between sender names.
const SENDER_SEPARATOR: &str = " and ";

/// A greeting from a named module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    module: String,
    sender: String,
}

impl Greeting {
    /// Create a greeting. Fails when `module` is blank.
    pub fn new(module: impl Into<String>, sender: impl Into<String>) -> Result<Self> {
        let module = module.into();
        if module.trim().is_empty() {
            return Err(Error::EmptyModuleName);
        }
        Ok(Self { module, sender: sender.into() })
    }

    /// Module name shown before the greeting.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Who the greeting is from.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Format as `"{module}: Hello from {sender}!"`.
    pub fn render(&self) -> String {
        format!("{}: Hello from {}!", self.module, self.sender)
    }
}

/// Join `names` with `" and "`, or fall back to `default_sender` when empty.
pub fn sender_from_args<S: AsRef<str>>(names: &[S], default_sender: &str) -> String {
    if names.is_empty() {
        return default_sender.to_string();
    }
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(SENDER_SEPARATOR)
}

#[cfg(test)]
#[path = "greeting_tests.rs"]
mod tests;
