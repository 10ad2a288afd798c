use crate::domain::menu::MenuEntry;
use crate::error::{FormError, Result};
use std::io::Read;

/// Reads menu entries from a CSV source (`item,price,quantity`).
///
/// Wraps `csv::Reader` and provides an iterator over `Result<MenuEntry>`,
/// trimming whitespace and tolerating a missing quantity column.
pub struct MenuReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes menu entries.
    pub fn entries(self) -> impl Iterator<Item = Result<MenuEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FormError::from))
            .map(|result| result.and_then(MenuEntry::validated))
    }
}
