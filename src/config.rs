//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor desde argumentos CLI y variables de entorno.
//! Se construye una vez en `main` y se pasa hacia abajo; no hay estado global.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_scratch --directory /tmp/data --verbose --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 DATA_DIR=/srv/files ./http_scratch
//! ```

use crate::http::reader::{REQUEST_MAX_LENGTH, REQUEST_TERMINATOR};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "http_scratch")]
#[command(about = "Servidor HTTP/1.1 sobre sockets TCP")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio que el servidor puede leer por /files/
    #[arg(long, default_value = "/dev/null", env = "DATA_DIR")]
    pub directory: PathBuf,

    /// Habilita los logs de debug
    #[arg(short, long, env = "HTTP_VERBOSE")]
    pub verbose: bool,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Tamaño máximo de un request en bytes
    #[arg(long = "max-request-bytes", default_value_t = REQUEST_MAX_LENGTH, env = "MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_scratch::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.max_request_bytes < REQUEST_TERMINATOR.len() {
            return Err(format!(
                "Max request bytes must be >= {}",
                REQUEST_TERMINATOR.len()
            ));
        }

        Ok(())
    }

    /// Escribe un resumen de la configuración en los logs
    pub fn log_summary(&self) {
        info!("Address:       {}", self.address());
        info!("Data dir:      {}", self.directory.display());
        info!("Max request:   {} bytes", self.max_request_bytes);
        info!("Verbose:       {}", self.verbose);
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            directory: PathBuf::from("/dev/null"),
            verbose: false,
            port: 4221,
            host: "0.0.0.0".to_string(),
            max_request_bytes: REQUEST_MAX_LENGTH,
        }
    }
}
