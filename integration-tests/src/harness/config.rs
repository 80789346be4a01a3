use cacheprobe_core::conf::{ImageArgs, ServerConfig};
use cacheprobe_core::synth::ImageSpec;

/// Loopback config on `port` with a canvas small enough for fast tests.
pub fn test_config(port: u16, spec: ImageSpec) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        port,
        threads: Some(2),
        image: ImageArgs {
            width: spec.width,
            height: spec.height,
        },
    }
}
