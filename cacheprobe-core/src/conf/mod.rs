mod error;
mod server;

pub use error::ConfigError;
pub use server::{DEFAULT_PORT, ImageArgs, ServerConfig};
