mod config;
pub mod server;
pub mod tracing;

pub use server::TestServer;
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
