use crate::domain::event::FormEvent;
use crate::error::{FormError, Result};
use std::io::Read;

/// Reads scripted form events from a CSV source (`at_ms,event,item,value`).
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScriptReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn events(self) -> impl Iterator<Item = Result<FormEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FormError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventKind;

    #[test]
    fn test_reader_valid_script() {
        let data = "at_ms, event, item, value\n0, input, Espresso, 2\n400, reset, , ";
        let reader = ScriptReader::new(data.as_bytes());
        let results: Vec<Result<FormEvent>> = reader.events().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.event, EventKind::Input);
        assert_eq!(first.value.as_deref(), Some("2"));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.event, EventKind::Reset);
        assert_eq!(second.item, None);
    }

    #[test]
    fn test_reader_malformed_event() {
        let data = "at_ms, event, item, value\nsoon, input, Espresso, 2";
        let reader = ScriptReader::new(data.as_bytes());
        let results: Vec<Result<FormEvent>> = reader.events().collect();

        assert!(results[0].is_err());
    }
}
