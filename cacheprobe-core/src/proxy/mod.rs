mod gateway;
mod respond;

pub use gateway::CacheTestGateway;
