//! Keyboard input normalization.
//!
//! This module provides functionality to:
//! - Map physical key identifiers to keypad actions
//! - Tokenize textual key scripts for replaying input

mod keys;
mod script;

pub use keys::{KeyAction, normalize_key};
pub use script::{parse_script, tokenize_script};
