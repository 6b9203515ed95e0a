// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alternating-case text utilities and the small greeter that ships beside them.

pub mod alternate;
pub mod cli;
pub mod error;
pub mod greeting;
pub mod logging;

pub use alternate::{DEFAULT_TEXT, alternate_case, alternate_char, is_alternating};
pub use error::{Error, Result};
pub use greeting::{Greeting, sender_from_args};
