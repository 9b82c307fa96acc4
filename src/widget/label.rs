//! Default in-memory display surface.

use super::capabilities::{DisplaySurface, Justification};

/// A plain text label with an optional edit buffer.
///
/// This is the surface the built-in themes hand out. It keeps everything in
/// memory and leaves drawing to the renderer.
#[derive(Debug, Clone, Default)]
pub struct TextLabel {
    text: String,
    editable: bool,
    edit_buffer: Option<String>,
    justification: Justification,
    tooltip: String,
    text_colour: String,
}

impl TextLabel {
    /// Creates an empty, read-only label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for TextLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
        }
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        if !editable {
            self.edit_buffer = None;
        }
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn is_being_edited(&self) -> bool {
        self.edit_buffer.is_some()
    }

    fn show_editor(&mut self) {
        if self.editable && self.edit_buffer.is_none() {
            self.edit_buffer = Some(self.text.clone());
        }
    }

    fn editor_text(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    fn insert_char(&mut self, c: char) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.push(c);
        }
    }

    fn delete_backward(&mut self) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
        }
    }

    fn finish_edit(&mut self, commit: bool) -> Option<String> {
        let buffer = self.edit_buffer.take()?;
        commit.then_some(buffer)
    }

    fn justification(&self) -> Justification {
        self.justification
    }

    fn set_justification(&mut self, justification: Justification) {
        self.justification = justification;
    }

    fn tooltip(&self) -> &str {
        &self.tooltip
    }

    fn set_tooltip(&mut self, tooltip: &str) {
        self.tooltip = tooltip.to_string();
    }

    fn set_text_colour(&mut self, colour: &str) {
        self.text_colour = colour.to_string();
    }

    fn text_colour(&self) -> &str {
        &self.text_colour
    }
}
