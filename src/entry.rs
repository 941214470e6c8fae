use serde::Serialize;

/// One vocabulary entry. Field order is the output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub word: String,
    pub meaning: String,
    pub hint: String,
    pub example: String,
}
