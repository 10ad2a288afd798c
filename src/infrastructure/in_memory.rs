use crate::domain::menu::MenuEntry;
use crate::domain::ports::FormSurface;

#[derive(Debug, Clone)]
struct Field {
    default: String,
    text: String,
    highlighted: bool,
}

impl Field {
    fn new(default: &str) -> Self {
        Self {
            default: default.to_string(),
            text: default.to_string(),
            highlighted: false,
        }
    }
}

/// The reference form surface backing the CLI and the test suite.
///
/// Holds one text field per line item plus an optional total display and an
/// optional submit control, mirroring a page where either element may simply
/// not be present.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    fields: Vec<Field>,
    total: Option<String>,
    submit_enabled: Option<bool>,
}

impl InMemorySurface {
    /// Builds a surface with one field per menu entry, seeded with the
    /// entry's default quantity text.
    pub fn for_menu(menu: &[MenuEntry]) -> Self {
        Self {
            fields: menu
                .iter()
                .map(|entry| Field::new(entry.default_text()))
                .collect(),
            total: Some(String::new()),
            submit_enabled: Some(true),
        }
    }

    /// Builds a surface from explicit default field texts.
    pub fn with_defaults(defaults: &[&str]) -> Self {
        Self {
            fields: defaults.iter().map(|text| Field::new(text)).collect(),
            total: Some(String::new()),
            submit_enabled: Some(true),
        }
    }

    /// A page with no total display element.
    pub fn without_total_display(mut self) -> Self {
        self.total = None;
        self
    }

    /// A page with no submit control.
    pub fn without_submit_control(mut self) -> Self {
        self.submit_enabled = None;
        self
    }
}

impl FormSurface for InMemorySurface {
    fn field_text(&self, line: usize) -> Option<String> {
        self.fields.get(line).map(|field| field.text.clone())
    }

    fn set_field_text(&mut self, line: usize, text: &str) {
        if let Some(field) = self.fields.get_mut(line) {
            text.clone_into(&mut field.text);
        }
    }

    fn total_text(&self) -> Option<String> {
        self.total.clone()
    }

    fn set_total_text(&mut self, text: &str) {
        if let Some(total) = self.total.as_mut() {
            text.clone_into(total);
        }
    }

    fn submit_enabled(&self) -> Option<bool> {
        self.submit_enabled
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if let Some(submit) = self.submit_enabled.as_mut() {
            *submit = enabled;
        }
    }

    fn is_highlighted(&self, line: usize) -> bool {
        self.fields.get(line).is_some_and(|field| field.highlighted)
    }

    fn set_highlighted(&mut self, line: usize, on: bool) {
        if let Some(field) = self.fields.get_mut(line) {
            field.highlighted = on;
        }
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.text = field.default.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fields_seeded_from_menu_defaults() {
        let menu = vec![
            MenuEntry {
                item: "Espresso".to_string(),
                price: dec!(2.50),
                quantity: Some("2".to_string()),
            },
            MenuEntry::new("Latte", dec!(3.00)),
        ];

        let surface = InMemorySurface::for_menu(&menu);
        assert_eq!(surface.field_text(0).as_deref(), Some("2"));
        assert_eq!(surface.field_text(1).as_deref(), Some(""));
        assert_eq!(surface.field_text(2), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut surface = InMemorySurface::with_defaults(&["1", ""]);
        surface.set_field_text(0, "7");
        surface.set_field_text(1, "3");

        surface.reset_fields();
        assert_eq!(surface.field_text(0).as_deref(), Some("1"));
        assert_eq!(surface.field_text(1).as_deref(), Some(""));
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut surface = InMemorySurface::with_defaults(&["0"])
            .without_total_display()
            .without_submit_control();

        surface.set_total_text("$1.00");
        surface.set_submit_enabled(false);
        assert_eq!(surface.total_text(), None);
        assert_eq!(surface.submit_enabled(), None);
    }

    #[test]
    fn test_out_of_range_line_is_ignored() {
        let mut surface = InMemorySurface::with_defaults(&["0"]);
        surface.set_field_text(5, "9");
        surface.set_highlighted(5, true);
        assert_eq!(surface.field_text(5), None);
        assert!(!surface.is_highlighted(5));
    }

    #[test]
    fn test_highlight_toggling() {
        let mut surface = InMemorySurface::with_defaults(&["0"]);
        assert!(!surface.is_highlighted(0));
        surface.set_highlighted(0, true);
        assert!(surface.is_highlighted(0));
        surface.set_highlighted(0, false);
        assert!(!surface.is_highlighted(0));
    }
}
