//! Calculation engines behind the keypad.
//!
//! The keypad never does arithmetic itself. It forwards value and operator
//! actions to an [`Engine`] and mirrors whatever display string comes back.
//! [`StandardEngine`] is the engine a keypad gets when the host supplies none.

mod format;
mod standard;

pub use format::{format_raw, group_thousands};
pub use standard::StandardEngine;

use crate::error::EngineError;
use crate::operator::Operator;

/// Contract between the keypad controller and the arithmetic/display engine.
///
/// An engine is owned by exactly one keypad and is only ever called
/// synchronously, one call at a time.
pub trait Engine {
    /// Apply a digit or decimal point to the current entry.
    ///
    /// Must succeed for `0`-`9` and `.`.
    fn process_value(&mut self, key: char) -> Result<String, EngineError>;

    /// Apply an operator to the current entry or accumulator.
    fn process_operator(&mut self, op: Operator) -> Result<String, EngineError>;

    /// Reset all accumulator and entry state.
    fn clear_all(&mut self);

    /// Current numeric value.
    fn result(&self) -> f64;

    /// Current display string.
    fn display(&self) -> String;

    /// Reset the engine and seed it with `value`.
    ///
    /// The default feeds the value's digits through [`Engine::process_value`]
    /// and toggles the sign for negatives.
    fn load(&mut self, value: f64) -> Result<String, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidSeed(value));
        }

        self.clear_all();
        let mut display = self.display();
        for key in format_raw(value.abs()).chars() {
            display = self.process_value(key)?;
        }
        if value < 0.0 {
            display = self.process_operator(Operator::NegPos)?;
        }
        Ok(display)
    }
}
