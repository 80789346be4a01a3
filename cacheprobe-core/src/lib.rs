pub mod cli;
pub mod conf;
pub mod counter;
pub mod ctx;
pub mod dispatch;
pub mod logging;
mod proxy;
pub mod server;
pub mod synth;
