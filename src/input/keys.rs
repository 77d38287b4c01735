//! Physical key to keypad action mapping.

use crate::operator::Operator;

/// A semantic keypad action produced by a key press or button click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// A digit character.
    Value(char),
    /// A symbolic operator.
    Operator(Operator),
    /// Commit the entry (`Enter`).
    Commit,
    /// Abandon the entry (`Escape`).
    Cancel,
}

impl From<Operator> for KeyAction {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Translate a physical key identifier into a keypad action.
///
/// Returns `None` for any key outside the fixed table; such keys must not
/// reach the controller at all.
pub fn normalize_key(key: &str) -> Option<KeyAction> {
    let action: KeyAction = match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            return key.chars().next().map(KeyAction::Value);
        }
        "a" | "A" => Operator::ClearAll.into(),
        "c" | "C" | "Clear" => Operator::Clear.into(),
        "Backspace" => Operator::Backspace.into(),
        "/" | "Divide" => Operator::Divide.into(),
        "*" | "Multiply" => Operator::Multiply.into(),
        "-" | "Subtract" => Operator::Subtract.into(),
        "+" | "Add" => Operator::Add.into(),
        "." | "Decimal" => Operator::Decimal.into(),
        "=" => Operator::Equals.into(),
        "Escape" => KeyAction::Cancel,
        "Enter" => KeyAction::Commit,
        _ => return None,
    };
    Some(action)
}
