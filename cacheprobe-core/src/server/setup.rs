use crate::conf::ServerConfig;
use crate::counter::RequestCounter;
use crate::dispatch::Dispatcher;
use crate::proxy::CacheTestGateway;
use crate::synth::ImageGenerator;
use anyhow::{Error, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration.
pub fn run(config: ServerConfig) -> Result<()> {
    config.validate()?;

    let dispatcher = build_dispatcher(&config);
    let server = build_pingora_server(&config, dispatcher)?;

    tracing::info!(
        listen = %config.listen_addr(),
        width = config.image.width,
        height = config.image.height,
        "cache test server starting"
    );

    server.run_forever();
}

/// Dispatcher with a fresh request counter, sized by the config.
pub fn build_dispatcher(config: &ServerConfig) -> Arc<Dispatcher> {
    let counter = Arc::new(RequestCounter::new());
    let generator = ImageGenerator::new(config.image.spec());
    Arc::new(Dispatcher::new(counter, generator))
}

/// Build the Pingora server.
pub fn build_pingora_server(
    config: &ServerConfig,
    dispatcher: Arc<Dispatcher>,
) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new()
            .ok_or_else(|| anyhow::anyhow!("could not construct pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = CacheTestGateway::new(dispatcher);

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.listen_addr());

    server.add_service(svc);

    Ok(server)
}
