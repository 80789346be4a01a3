mod setup;

pub use setup::{build_dispatcher, build_pingora_server, run};
