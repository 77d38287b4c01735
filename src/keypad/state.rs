//! Widget-local keypad state.

use crate::operator::Operator;

/// Controller-visible interaction phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Composing an entry; no result has been finalized.
    #[default]
    Idle,
    /// `Equals` was processed and nothing has reset the keypad since.
    ResultShown,
}

/// Display text and phase, owned by one keypad.
///
/// The display only ever takes a string produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetState {
    display: String,
    phase: Phase,
}

impl WidgetState {
    pub(crate) fn new(display: String) -> Self {
        Self {
            display,
            phase: Phase::Idle,
        }
    }

    /// Text shown in the read-only display field.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the last processed action was `Equals` with no reset since.
    pub fn result_finalized(&self) -> bool {
        self.phase == Phase::ResultShown
    }

    /// Resolve the operator actually sent to the engine.
    ///
    /// `Clear` has no entry to clear once a result is finalized, so it is
    /// promoted to `ClearAll`.
    pub fn resolve(&self, op: Operator) -> Operator {
        match (op, self.phase) {
            (Operator::Clear, Phase::ResultShown) => Operator::ClearAll,
            _ => op,
        }
    }

    pub(crate) fn apply_value(&mut self, display: String) {
        self.display = display;
    }

    /// Record the engine's answer to a dispatched (already resolved) operator.
    pub(crate) fn apply_operator(&mut self, dispatched: Operator, display: String) {
        self.display = display;
        match dispatched {
            Operator::Equals => self.phase = Phase::ResultShown,
            Operator::ClearAll => self.phase = Phase::Idle,
            _ => {}
        }
    }

    pub(crate) fn reset(&mut self, display: String) {
        self.display = display;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalized() -> WidgetState {
        let mut state = WidgetState::new("0".to_string());
        state.apply_operator(Operator::Equals, "10".to_string());
        state
    }

    #[test]
    fn test_starts_idle() {
        let state = WidgetState::new("0".to_string());
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.result_finalized());
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_equals_finalizes() {
        let state = finalized();
        assert!(state.result_finalized());
        assert_eq!(state.display(), "10");
    }

    #[test]
    fn test_clear_promoted_only_when_finalized() {
        let idle = WidgetState::new("0".to_string());
        assert_eq!(idle.resolve(Operator::Clear), Operator::Clear);
        assert_eq!(finalized().resolve(Operator::Clear), Operator::ClearAll);
    }

    #[test]
    fn test_other_operators_never_promoted() {
        let state = finalized();
        for op in Operator::ALL {
            if op != Operator::Clear {
                assert_eq!(state.resolve(op), op);
            }
        }
    }

    #[test]
    fn test_non_equals_operators_keep_phase() {
        let mut state = finalized();
        state.apply_operator(Operator::Backspace, "1".to_string());
        assert!(state.result_finalized());
        state.apply_value("12".to_string());
        assert!(state.result_finalized());
        state.apply_operator(Operator::ClearAll, "0".to_string());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset() {
        let mut state = finalized();
        state.reset("0".to_string());
        assert_eq!(state, WidgetState::new("0".to_string()));
    }
}
