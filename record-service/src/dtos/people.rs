use crate::models::Person;
use serde::{Deserialize, Serialize};

/// Body of `POST /create`. The caller supplies the id; the name fields may be
/// left out.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Wire shape of a person: `{"id", "first_name", "last_name"}` with empty
/// fields omitted. The default value serializes as `{}`, which is how an
/// absent record is reported.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersonResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
        }
    }
}

impl From<CreatePersonRequest> for Person {
    fn from(request: CreatePersonRequest) -> Self {
        Person::new(request.id, request.first_name, request.last_name)
    }
}
