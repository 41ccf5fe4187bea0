pub mod health;
pub mod people;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use people::{create_person, get_person, remove_person};
