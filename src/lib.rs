//! numpad - an embeddable numeric-entry keypad.
//!
//! A [`Keypad`] takes input from on-screen [`Button`]s and from the
//! keyboard, forwards it to an [`Engine`] and hands the final number to its
//! host on commit.

pub mod clipboard;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod keypad;
pub mod operator;

pub use engine::{Engine, StandardEngine};
pub use error::{ConfigError, EngineError};
pub use input::{KeyAction, normalize_key};
pub use keypad::{Button, Keypad, KeypadOptions, Phase, WidgetState};
pub use operator::Operator;
