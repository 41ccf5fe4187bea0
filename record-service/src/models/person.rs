use serde::{Deserialize, Serialize};

/// A person record as stored in the `people` collection.
///
/// The externally supplied `id` doubles as the collection's `_id` primary key,
/// so uniqueness is enforced by the store itself. Empty name fields are omitted
/// on encode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

impl Person {
    pub fn new(id: String, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }
}
