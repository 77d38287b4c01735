//! On-screen keypad buttons.
//!
//! Each button carries the same [`KeyAction`] the keyboard produces for the
//! same function, so clicks and key presses go through one dispatch path.

use crate::input::KeyAction;
use crate::operator::Operator;

/// A single on-screen keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    /// Text printed on the button.
    pub label: &'static str,
    /// Action issued when the button is pressed.
    pub action: KeyAction,
}

impl Button {
    const fn digit(label: &'static str, digit: char) -> Self {
        Self {
            label,
            action: KeyAction::Value(digit),
        }
    }

    const fn operator(label: &'static str, op: Operator) -> Self {
        Self {
            label,
            action: KeyAction::Operator(op),
        }
    }

    /// Find a button by its label.
    pub fn find(label: &str) -> Option<Button> {
        LAYOUT
            .iter()
            .flatten()
            .find(|button| button.label == label)
            .copied()
    }

    /// Iterate over every button, row by row.
    pub fn all() -> impl Iterator<Item = Button> {
        LAYOUT.iter().flatten().copied()
    }
}

/// Keypad grid, top row first.
pub static LAYOUT: [[Button; 4]; 5] = [
    [
        Button::operator("AC", Operator::ClearAll),
        Button::operator("C", Operator::Clear),
        Button::operator("⌫", Operator::Backspace),
        Button::operator("÷", Operator::Divide),
    ],
    [
        Button::digit("7", '7'),
        Button::digit("8", '8'),
        Button::digit("9", '9'),
        Button::operator("×", Operator::Multiply),
    ],
    [
        Button::digit("4", '4'),
        Button::digit("5", '5'),
        Button::digit("6", '6'),
        Button::operator("−", Operator::Subtract),
    ],
    [
        Button::digit("1", '1'),
        Button::digit("2", '2'),
        Button::digit("3", '3'),
        Button::operator("+", Operator::Add),
    ],
    [
        Button::operator("±", Operator::NegPos),
        Button::digit("0", '0'),
        Button::operator(".", Operator::Decimal),
        Button::operator("=", Operator::Equals),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::normalize_key;

    #[test]
    fn test_every_operator_has_a_button() {
        for op in Operator::ALL {
            let button = Button::all()
                .find(|b| b.action == KeyAction::Operator(op))
                .unwrap_or_else(|| panic!("no button for {op}"));
            assert_eq!(button.label, op.label());
        }
    }

    #[test]
    fn test_digit_buttons_match_keyboard() {
        for digit in '0'..='9' {
            let key = digit.to_string();
            let button = Button::find(&key).unwrap();
            assert_eq!(Some(button.action), normalize_key(&key));
        }
    }

    #[test]
    fn test_operator_buttons_match_keyboard_names() {
        let keyed = [
            Operator::Clear,
            Operator::Backspace,
            Operator::Divide,
            Operator::Multiply,
            Operator::Subtract,
            Operator::Add,
            Operator::Decimal,
        ];
        for op in keyed {
            let button = Button::find(op.label()).unwrap();
            assert_eq!(Some(button.action), normalize_key(op.name()));
        }
    }

    #[test]
    fn test_find_unknown_label() {
        assert_eq!(Button::find("%"), None);
        assert_eq!(Button::all().count(), 20);
    }
}
