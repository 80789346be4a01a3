use crate::conf::ConfigError;
use crate::synth::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ImageSpec};
use clap::Args;
use std::net::IpAddr;

pub const DEFAULT_PORT: u16 = 3000;

const MAX_THREADS: usize = 1024;
const MAX_CANVAS_SIDE: u32 = 20_000;

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Optional number of worker threads - default is decided by Pingora.
    #[arg(long, env = "THREADS")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub image: ImageArgs,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct ImageArgs {
    /// Width of generated images in pixels
    #[arg(long, env = "IMAGE_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height of generated images in pixels
    #[arg(long, env = "IMAGE_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: DEFAULT_PORT,
            threads: None,
            image: ImageArgs::default(),
        }
    }
}

impl Default for ImageArgs {
    fn default() -> Self {
        let spec = ImageSpec::default();
        Self {
            width: spec.width,
            height: spec.height,
        }
    }
}

impl ImageArgs {
    pub fn spec(&self) -> ImageSpec {
        ImageSpec {
            width: self.width,
            height: self.height,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |side: u32| (1..=MAX_CANVAS_SIDE).contains(&side);
        if !side_ok(self.width) || !side_ok(self.height) {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
                max: MAX_CANVAS_SIDE,
            });
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Fail-fast validation; the first problem found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost {
                host: self.host.clone(),
            })?;

        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if let Some(threads) = self.threads
            && (threads == 0 || threads > MAX_THREADS)
        {
            return Err(ConfigError::InvalidThreads { threads });
        }

        self.image.validate()
    }

    /// `host:port`, bracketing IPv6 hosts.
    pub fn listen_addr(&self) -> String {
        match self.host.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => format!("[{v6}]:{}", self.port),
            _ => format!("{}:{}", self.host, self.port),
        }
    }
}
