/// Structural contract with the host page.
///
/// The surface owns the raw field texts, the total display and the submit
/// control; the controller only reads and writes through this trait. All
/// mutation happens on the single UI thread, so the port is synchronous.
///
/// A surface may lack a total display or a submit control; the corresponding
/// setters are then no-ops and the getters return `None`. Out-of-range line
/// indices are ignored.
pub trait FormSurface {
    /// Raw text of a quantity field, `None` if the field does not exist.
    fn field_text(&self, line: usize) -> Option<String>;
    fn set_field_text(&mut self, line: usize, text: &str);

    fn total_text(&self) -> Option<String>;
    fn set_total_text(&mut self, text: &str);

    fn submit_enabled(&self) -> Option<bool>;
    fn set_submit_enabled(&mut self, enabled: bool);

    fn is_highlighted(&self, line: usize) -> bool;
    fn set_highlighted(&mut self, line: usize, on: bool);

    /// Native form reset: restores every field to its default text.
    fn reset_fields(&mut self);
}
