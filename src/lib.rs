pub mod config;
pub mod error;
pub mod fashion;
pub mod payload;
pub mod process;
pub mod routes;
pub mod ui;

pub use config::Config;
pub use process::ProcessedResult;
pub use routes::{app, ProcessResponse};
