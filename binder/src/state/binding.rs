use engine::NumberFormatter;
use std::sync::Arc;
use tracing::trace;

use crate::cursor::remap_caret;
use crate::view::{NumericField, WordsOutput};

/// What one input event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Cleaned Latin value both renderings were derived from.
    pub raw: String,
    pub display: String,
    pub words: String,
    pub caret: Option<usize>,
}

/// One numeric field and the element that shows its value in words.
///
/// `handle_input` rewrites the field immediately but only schedules the caret
/// move; `on_frame` applies it, mirroring a deferred animation-frame callback.
pub struct FieldBinding<F, O> {
    field: F,
    output: Option<O>,
    formatter: Arc<NumberFormatter>,
    pending_caret: Option<usize>,
}

impl<F: NumericField, O: WordsOutput> FieldBinding<F, O> {
    pub fn new(field: F, output: Option<O>, formatter: Arc<NumberFormatter>) -> Self {
        Self {
            field,
            output,
            formatter,
            pending_caret: None,
        }
    }

    pub fn handle_input(&mut self) -> FieldUpdate {
        let current = self.field.value().unwrap_or_default();
        let caret = self.field.caret();

        // every rendering reads the typed text under the configured separators;
        // `raw` always uses `.` and would not survive a second cleaning
        let raw = self.formatter.clean(&current).as_latin();
        let display = self.formatter.separate(&current);
        let words = self.formatter.to_words(&current);

        self.field.set_value(&display);
        if let Some(output) = self.output.as_mut() {
            output.set_text(&words);
        }

        let decimal = self.formatter.settings().decimal_separator;
        let new_caret = caret.map(|c| remap_caret(&current, c, &display, decimal));
        // a newer event replaces any caret move still waiting for a frame
        self.pending_caret = new_caret;
        trace!(raw = %raw, caret = ?new_caret, "reformatted numeric field");

        FieldUpdate {
            raw,
            display,
            words,
            caret: new_caret,
        }
    }

    /// Applies the scheduled caret move if the field still has focus.
    /// Returns whether the caret was moved.
    pub fn on_frame(&mut self) -> bool {
        match self.pending_caret.take() {
            Some(position) if self.field.has_focus() => {
                self.field.set_caret(position);
                true
            }
            _ => false,
        }
    }

    pub fn has_pending_caret(&self) -> bool {
        self.pending_caret.is_some()
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }
}
