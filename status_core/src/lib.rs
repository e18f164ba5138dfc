pub mod config;
pub mod error;
pub mod snapshot;

pub use config::ServerConfig;
pub use error::{Result, StatusError};
pub use snapshot::HostSnapshot;
