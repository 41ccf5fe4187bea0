pub mod people;

pub use people::{CreatePersonRequest, PersonResponse};
