//! Immediate-execution four-function engine.

use super::Engine;
use super::format::{format_raw, group_thousands};
use crate::error::EngineError;
use crate::operator::Operator;

/// Maximum number of digits accepted in a typed entry.
const MAX_DIGITS: usize = 16;

/// Display shown after a failed computation (division by zero, overflow).
const ERROR_DISPLAY: &str = "Error";

/// The default keypad engine.
///
/// Operations run left to right as they are entered (no precedence), the
/// way a pocket calculator behaves.
#[derive(Clone, Debug)]
pub struct StandardEngine {
    /// Raw text of the current entry, without separators.
    entry: String,
    /// Running total waiting for the armed operator.
    accumulator: Option<f64>,
    /// Armed binary operator.
    pending: Option<Operator>,
    /// Last evaluated operation, repeated by consecutive `Equals`.
    last: Option<(Operator, f64)>,
    /// The next digit replaces the entry instead of extending it.
    overwrite: bool,
    error: bool,
    digit_grouping: bool,
}

impl Default for StandardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardEngine {
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending: None,
            last: None,
            overwrite: false,
            error: false,
            digit_grouping: true,
        }
    }

    /// Enable or disable thousand separators in the display.
    pub fn with_digit_grouping(mut self, enabled: bool) -> Self {
        self.digit_grouping = enabled;
        self
    }

    /// Raw entry text, without separators.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Check if the engine is showing an error.
    pub fn is_error(&self) -> bool {
        self.error
    }

    fn entry_value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    /// The entry shows a finished result rather than a running total.
    fn showing_result(&self) -> bool {
        self.overwrite && self.pending.is_none()
    }

    fn push_digit(&mut self, digit: char) {
        if self.overwrite {
            self.entry = digit.to_string();
            self.overwrite = false;
            return;
        }

        if self.entry == "0" {
            self.entry = digit.to_string();
            return;
        }

        // Leading zeros of "0.00x" are not significant
        let digits = self
            .entry
            .chars()
            .filter(|c| c.is_ascii_digit())
            .skip_while(|&c| c == '0')
            .count();
        if digits < MAX_DIGITS {
            self.entry.push(digit);
        }
    }

    fn push_point(&mut self) {
        if self.overwrite {
            self.entry = "0.".to_string();
            self.overwrite = false;
        } else if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.overwrite {
            // Nothing typed yet after an arithmetic operator
            if !self.showing_result() {
                return;
            }
            self.overwrite = false;
        }

        self.entry.pop();
        if matches!(self.entry.as_str(), "" | "-" | "-0") {
            self.entry = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        let is_zero = self
            .entry
            .chars()
            .all(|c| c == '0' || c == '.' || c == '-');
        if is_zero {
            return;
        }

        match self.entry.strip_prefix('-') {
            Some(rest) => self.entry = rest.to_string(),
            None => self.entry.insert(0, '-'),
        }
    }

    fn arm(&mut self, op: Operator) {
        if self.pending.is_some() && self.overwrite {
            self.pending = Some(op);
            return;
        }

        let operand = self.entry_value();
        let total = match (self.accumulator, self.pending) {
            (Some(acc), Some(pending)) => apply(acc, pending, operand),
            _ => Some(operand),
        };

        match total {
            Some(total) => {
                self.accumulator = Some(total);
                self.entry = format_raw(total);
                self.pending = Some(op);
                self.overwrite = true;
            }
            None => self.fail(),
        }
    }

    fn equals(&mut self) {
        let operation = match (self.accumulator, self.pending) {
            (Some(acc), Some(pending)) => Some((acc, pending, self.entry_value())),
            _ if self.showing_result() => self
                .last
                .map(|(op, operand)| (self.entry_value(), op, operand)),
            _ => None,
        };

        let Some((acc, op, operand)) = operation else {
            let value = self.entry_value();
            self.show_result(value);
            return;
        };

        match apply(acc, op, operand) {
            Some(total) => {
                self.last = Some((op, operand));
                self.show_result(total);
            }
            None => self.fail(),
        }
    }

    fn show_result(&mut self, value: f64) {
        self.entry = format_raw(value);
        self.accumulator = None;
        self.pending = None;
        self.overwrite = true;
    }

    fn fail(&mut self) {
        self.clear_all();
        self.error = true;
    }
}

/// Evaluate one binary operation; `None` when the result is not a finite number.
fn apply(acc: f64, op: Operator, operand: f64) -> Option<f64> {
    let value = match op {
        Operator::Add => acc + operand,
        Operator::Subtract => acc - operand,
        Operator::Multiply => acc * operand,
        Operator::Divide if operand == 0.0 => return None,
        Operator::Divide => acc / operand,
        _ => operand,
    };
    value.is_finite().then_some(value)
}

impl Engine for StandardEngine {
    fn process_value(&mut self, key: char) -> Result<String, EngineError> {
        if !matches!(key, '0'..='9' | '.') {
            return Err(EngineError::InvalidValue(key));
        }

        if self.error {
            self.clear_all();
        }

        if key == '.' {
            self.push_point();
        } else {
            self.push_digit(key);
        }

        Ok(self.display())
    }

    fn process_operator(&mut self, op: Operator) -> Result<String, EngineError> {
        if self.error {
            self.clear_all();
        }

        match op {
            Operator::ClearAll => self.clear_all(),
            Operator::Clear => {
                self.entry = "0".to_string();
                self.overwrite = false;
            }
            Operator::Backspace => self.backspace(),
            Operator::Decimal => self.push_point(),
            Operator::NegPos => self.toggle_sign(),
            Operator::Equals => self.equals(),
            Operator::Divide | Operator::Multiply | Operator::Subtract | Operator::Add => {
                self.arm(op)
            }
        }

        Ok(self.display())
    }

    fn clear_all(&mut self) {
        *self = Self::new().with_digit_grouping(self.digit_grouping);
    }

    fn result(&self) -> f64 {
        if self.error {
            return 0.0;
        }
        self.entry_value()
    }

    fn display(&self) -> String {
        if self.error {
            ERROR_DISPLAY.to_string()
        } else if self.digit_grouping {
            group_thousands(&self.entry)
        } else {
            self.entry.clone()
        }
    }

    fn load(&mut self, value: f64) -> Result<String, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidSeed(value));
        }

        self.clear_all();
        self.show_result(value);
        Ok(self.display())
    }
}
