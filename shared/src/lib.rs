pub mod config;
pub mod errors;
pub mod handler;
pub mod models;
pub mod sinks;

pub use config::*;
pub use errors::*;
pub use handler::*;
pub use models::*;
pub use sinks::*;
