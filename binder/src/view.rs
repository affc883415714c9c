// The page elements a binding reads from and writes to.
//
// Caret positions are counted in chars, not bytes.

pub trait NumericField {
    /// Current text; `None` when the element has no value at all.
    fn value(&self) -> Option<String>;
    fn caret(&self) -> Option<usize>;
    fn has_focus(&self) -> bool;
    fn set_value(&mut self, value: &str);
    fn set_caret(&mut self, position: usize);
}

pub trait WordsOutput {
    fn set_text(&mut self, text: &str);
}
