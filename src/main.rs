//! # HTTP Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1.

use http_scratch::config::Config;
use http_scratch::logger;
use http_scratch::server::Server;
use log::{debug, error};

fn main() {
    let config = Config::new();

    logger::init(config.verbose);
    debug!(
        "dirpath: {}, verbosity: {}",
        config.directory.display(),
        config.verbose
    );

    if let Err(e) = config.validate() {
        error!("Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.log_summary();

    let address = config.address();
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        error!("Failed to bind to {}", address);
        error!("{}", e);
        std::process::exit(1);
    }
}
