//! Input adapter for a slider paired with a numeric text box.
//!
//! Slider drags commit on every movement. Typing commits after a quiet
//! period, and only when the typed value is in range. Leaving the text box
//! always commits, clamping whatever was typed. External updates are
//! adopted only while the operator is not interacting with the control.
//!
//! Time is passed in by the caller so the adapter stays deterministic.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use rotation_core::bounds::InputBounds;
//! use rotation_core::editor::FieldEditor;
//! use rotation_core::types::InputField;
//!
//! let bounds = InputBounds::default().get(InputField::LocalFrequency);
//! let mut editor = FieldEditor::new(InputField::LocalFrequency, bounds, 7.0);
//!
//! let t0 = Instant::now();
//! editor.focus();
//! editor.type_text("45", t0);
//! assert!(editor.poll(t0 + Duration::from_secs(1)).is_none()); // out of range
//! let commit = editor.blur();
//! assert_eq!(commit.value, 30.0);
//! ```

use std::time::{Duration, Instant};

use tracing::trace;

use crate::bounds::FieldBounds;
use crate::types::{FieldCommit, InputField};

/// Quiet period before a typed value is committed.
pub const TYPING_DEBOUNCE: Duration = Duration::from_millis(500);

/// Editing state of one input field.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    field: InputField,
    bounds: FieldBounds,
    value: f64,
    text: String,
    dragging: bool,
    focused: bool,
    pending: Option<PendingCommit>,
    debounce: Duration,
}

#[derive(Debug, Clone, Copy)]
struct PendingCommit {
    value: f64,
    due: Instant,
}

impl FieldEditor {
    /// Creates an editor showing `value`.
    #[must_use]
    pub fn new(field: InputField, bounds: FieldBounds, value: f64) -> Self {
        Self {
            field,
            bounds,
            value,
            text: format_value(value),
            dragging: false,
            focused: false,
            pending: None,
            debounce: TYPING_DEBOUNCE,
        }
    }

    /// Overrides the typing debounce.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The field this editor controls.
    #[must_use]
    pub fn field(&self) -> InputField {
        self.field
    }

    /// The value currently shown on the slider.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The text currently shown in the text box.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while a drag or text edit is in progress.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.dragging || self.focused
    }

    /// True if a typed value is waiting for its debounce.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Pointer pressed on the slider.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Slider moved; commits immediately.
    pub fn drag_to(&mut self, value: f64) -> FieldCommit {
        let value = self.bounds.clamp(value);
        self.value = value;
        self.text = format_value(value);
        self.commit(value)
    }

    /// Pointer released or left the slider.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Text box gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Text box content changed.
    ///
    /// A parseable value is shown on the slider at once and scheduled for
    /// commit after the debounce, replacing any earlier schedule. Values
    /// outside the bounds are shown but never scheduled.
    pub fn type_text(&mut self, text: &str, now: Instant) {
        self.text = text.to_string();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let Ok(value) = trimmed.parse::<f64>() else {
            return;
        };
        if value.is_nan() {
            return;
        }
        self.value = value;
        self.pending = self.bounds.contains(value).then(|| PendingCommit {
            value,
            due: now + self.debounce,
        });
    }

    /// Fires the pending commit if its debounce has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<FieldCommit> {
        match self.pending {
            Some(pending) if now >= pending.due => {
                self.pending = None;
                Some(self.commit(pending.value))
            }
            _ => None,
        }
    }

    /// Text box lost focus; clamps and commits whatever was typed.
    pub fn blur(&mut self) -> FieldCommit {
        self.focused = false;
        self.pending = None;
        let value = self.bounds.clamp(self.text.trim().parse::<f64>().unwrap_or(f64::NAN));
        self.value = value;
        self.text = format_value(value);
        self.commit(value)
    }

    /// Adopts a value changed elsewhere, unless the operator is editing.
    ///
    /// Returns true if the value was adopted.
    pub fn sync_external(&mut self, value: f64) -> bool {
        if self.is_interacting() || value == self.value {
            return false;
        }
        self.value = value;
        self.text = format_value(value);
        true
    }

    /// Whether a typed character may enter the text box.
    ///
    /// Digits always; one decimal point; a minus sign only as the first
    /// character and only for fields that allow negatives.
    #[must_use]
    pub fn accepts_char(&self, c: char) -> bool {
        c.is_ascii_digit()
            || (c == '.' && !self.text.contains('.'))
            || (c == '-' && self.text.is_empty() && self.bounds.min < 0.0)
    }

    fn commit(&self, value: f64) -> FieldCommit {
        trace!(field = %self.field, value, "field committed");
        FieldCommit::new(self.field, value)
    }
}

fn format_value(value: f64) -> String {
    format!("{value}")
}
