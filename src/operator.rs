//! Symbolic keypad operators.

use std::fmt;

/// A symbolic action distinct from digit entry.
///
/// The set is closed: every operator the keypad can issue, from the keyboard
/// or from an on-screen button, is one of these ten values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Reset the whole computation.
    ClearAll,
    /// Clear the current entry only.
    Clear,
    /// Remove the last entered character.
    Backspace,
    Divide,
    Multiply,
    Subtract,
    Add,
    /// Enter a decimal point.
    Decimal,
    /// Finalize the pending computation.
    Equals,
    /// Toggle the sign of the current entry.
    NegPos,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 10] = [
        Self::ClearAll,
        Self::Clear,
        Self::Backspace,
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
        Self::Decimal,
        Self::Equals,
        Self::NegPos,
    ];

    /// Canonical name, as used by named keys and key scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClearAll => "ClearAll",
            Self::Clear => "Clear",
            Self::Backspace => "Backspace",
            Self::Divide => "Divide",
            Self::Multiply => "Multiply",
            Self::Subtract => "Subtract",
            Self::Add => "Add",
            Self::Decimal => "Decimal",
            Self::Equals => "Equals",
            Self::NegPos => "NegPos",
        }
    }

    /// Label shown on the on-screen button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClearAll => "AC",
            Self::Clear => "C",
            Self::Backspace => "⌫",
            Self::Divide => "÷",
            Self::Multiply => "×",
            Self::Subtract => "−",
            Self::Add => "+",
            Self::Decimal => ".",
            Self::Equals => "=",
            Self::NegPos => "±",
        }
    }

    /// Look an operator up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Check if this is one of the four arithmetic operators.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Divide | Self::Multiply | Self::Subtract | Self::Add
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_parse_back() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_name(op.name()), Some(op));
        }
        assert_eq!(Operator::from_name("Percent"), None);
        assert_eq!(Operator::from_name("add"), None);
    }

    #[test]
    fn test_arithmetic_subset() {
        let arithmetic: Vec<_> = Operator::ALL
            .into_iter()
            .filter(Operator::is_arithmetic)
            .collect();
        assert_eq!(
            arithmetic,
            vec![
                Operator::Divide,
                Operator::Multiply,
                Operator::Subtract,
                Operator::Add
            ]
        );
    }
}
