use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Change,
    Reset,
}

/// A scripted form event, timestamped in milliseconds from the start of the
/// replay. `item` and `value` are unused for reset events.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct FormEvent {
    pub at_ms: u64,
    pub event: EventKind,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}
