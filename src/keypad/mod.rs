//! The keypad interaction controller.
//!
//! Reconciles on-screen button presses and keyboard events into one ordered
//! stream of value and operator actions, forwards each to the engine and
//! mirrors the engine's display. Also owns the commit/cancel life-cycle.

mod buttons;
mod state;

pub use buttons::{Button, LAYOUT};
pub use state::{Phase, WidgetState};

use crate::engine::{Engine, StandardEngine};
use crate::error::EngineError;
use crate::input::{KeyAction, normalize_key};
use crate::operator::Operator;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Construction-time keypad options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeypadOptions {
    /// Number the display starts with.
    pub initial_value: Option<f64>,
    /// Decoration shown next to the display.
    pub icon: Option<String>,
}

impl KeypadOptions {
    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A numeric-entry keypad bound to one engine.
pub struct Keypad<E: Engine = StandardEngine> {
    engine: E,
    state: WidgetState,
    icon: Option<String>,
    focused: bool,
    on_commit: Option<Arc<dyn Fn(f64) + Send + Sync>>,
    on_cancel: Option<Arc<dyn Fn() + Send + Sync>>,
    on_focus: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Keypad<StandardEngine> {
    /// Create a keypad backed by a fresh [`StandardEngine`].
    pub fn new(options: KeypadOptions) -> Result<Self, EngineError> {
        Self::with_engine(StandardEngine::new(), options)
    }
}

impl<E: Engine> Keypad<E> {
    /// Create a keypad that takes ownership of `engine`.
    ///
    /// The initial value, if any, is loaded through the engine.
    pub fn with_engine(mut engine: E, options: KeypadOptions) -> Result<Self, EngineError> {
        let display = match options.initial_value {
            Some(value) => engine.load(value)?,
            None => engine.display(),
        };

        Ok(Self {
            engine,
            state: WidgetState::new(display),
            icon: options.icon,
            focused: false,
            on_commit: None,
            on_cancel: None,
            on_focus: None,
        })
    }

    /// Set the callback receiving the committed value.
    pub fn set_on_commit(&mut self, callback: impl Fn(f64) + Send + Sync + 'static) {
        self.on_commit = Some(Arc::new(callback));
    }

    /// Set the callback for when the entry is cancelled.
    pub fn set_on_cancel(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_cancel = Some(Arc::new(callback));
    }

    /// Set the callback asking the host to move input focus to the keypad.
    pub fn set_on_focus(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_focus = Some(Arc::new(callback));
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Current numeric value held by the engine.
    pub fn result(&self) -> f64 {
        self.engine.result()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Attach the keypad to its host; takes input focus.
    pub fn mount(&mut self) {
        self.request_focus();
    }

    /// Record that input focus moved elsewhere.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn request_focus(&mut self) {
        if !self.focused {
            trace!("keypad takes focus");
        }
        self.focused = true;
        if let Some(ref on_focus) = self.on_focus {
            on_focus();
        }
    }

    /// Forward a digit or decimal point to the engine.
    pub fn submit_value(&mut self, key: char) -> Result<(), EngineError> {
        debug!(%key, "submit value");
        let display = self.engine.process_value(key)?;
        self.state.apply_value(display);
        self.request_focus();
        Ok(())
    }

    /// Forward an operator to the engine, promoting `Clear` after a result.
    pub fn submit_operator(&mut self, op: Operator) -> Result<(), EngineError> {
        let dispatched = self.state.resolve(op);
        if dispatched != op {
            debug!(from = %op, to = %dispatched, "promoting operator on finalized result");
        }
        debug!(op = %dispatched, "submit operator");

        let display = self.engine.process_operator(dispatched)?;
        self.state.apply_operator(dispatched, display);
        self.request_focus();
        Ok(())
    }

    /// Hand the engine's value to the host, then reset.
    pub fn commit(&mut self) {
        let value = self.engine.result();
        info!(value, "commit");
        if let Some(ref on_commit) = self.on_commit {
            on_commit(value);
        }
        self.reset();
    }

    /// Notify the host the entry was abandoned, then reset.
    pub fn cancel(&mut self) {
        info!("cancel");
        if let Some(ref on_cancel) = self.on_cancel {
            on_cancel();
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.engine.clear_all();
        self.state.reset(self.engine.display());
    }

    /// Route one normalized action.
    ///
    /// `Commit` first finalizes the entry with `Equals` unless a result is
    /// already shown.
    pub fn dispatch(&mut self, action: KeyAction) -> Result<(), EngineError> {
        match action {
            KeyAction::Value(key) => self.submit_value(key),
            KeyAction::Operator(op) => self.submit_operator(op),
            KeyAction::Cancel => {
                self.cancel();
                Ok(())
            }
            KeyAction::Commit => {
                if !self.state.result_finalized() {
                    self.submit_operator(Operator::Equals)?;
                }
                self.commit();
                Ok(())
            }
        }
    }

    /// Handle a physical key press.
    ///
    /// Returns the action that was dispatched, or `None` when the key is not
    /// mapped or the keypad does not have focus.
    pub fn handle_key(&mut self, key: &str) -> Result<Option<KeyAction>, EngineError> {
        if !self.focused {
            trace!(key, "keypad not focused, ignoring key");
            return Ok(None);
        }

        let Some(action) = normalize_key(key) else {
            trace!(key, "ignoring unmapped key");
            return Ok(None);
        };

        self.dispatch(action)?;
        Ok(Some(action))
    }

    /// Handle a click on an on-screen button.
    pub fn press(&mut self, button: &Button) -> Result<(), EngineError> {
        debug!(label = button.label, "button pressed");
        self.dispatch(button.action)?;
        self.request_focus();
        Ok(())
    }
}
