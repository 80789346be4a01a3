use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid host {host:?} - expected an IP address")]
    InvalidHost { host: String },

    #[error("invalid port - must be between 1 and 65535")]
    InvalidPort,

    #[error("invalid threads - must be between 1 and 1024: {threads}")]
    InvalidThreads { threads: usize },

    #[error("invalid canvas {width}x{height} - each side must be between 1 and {max}")]
    InvalidCanvas { width: u32, height: u32, max: u32 },
}
