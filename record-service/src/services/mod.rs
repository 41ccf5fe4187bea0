pub mod database;
pub mod metrics;

pub use database::PersonDb;
pub use metrics::{get_metrics, init_metrics};
