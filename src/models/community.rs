use serde::{Deserialize, Serialize};

/// A community/event with its own attendee roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Community {
    pub id: String,
    pub name: String,
}

impl Community {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}
