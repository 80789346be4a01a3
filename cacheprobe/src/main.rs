use cacheprobe_core::cli::render::{self, RenderArgs};
use cacheprobe_core::conf::ServerConfig;
use cacheprobe_core::logging::init_logging;
use cacheprobe_core::server;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cacheprobe",
    version,
    about = "HTTP server serving large generated images to exercise browser and proxy caches",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    server: ServerConfig,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the cache test server (default)
    Run {
        #[command(flatten)]
        server: ServerConfig,
    },

    /// Write a single generated image to disk
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Render(args)) => render::run(args),

        Some(Command::Run { server }) => {
            init_logging();
            server::run(server)
        }

        None => {
            init_logging();
            server::run(cli.server)
        }
    };

    if let Err(e) = result {
        eprintln!("cacheprobe: {e:#}");
        std::process::exit(1);
    }
}
