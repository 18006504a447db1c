//! # HTTP Scratch
//! src/lib.rs
//!
//! Servidor HTTP/1.1 implementado directamente sobre sockets TCP, sin
//! librerías HTTP: framing de requests, parsing, routing y serialización
//! de responses están hechos a mano.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Lectura, parsing y serialización del protocolo HTTP/1.1
//! - `router`: Enrutamiento por primer segmento del path
//! - `handlers`: `/echo`, `/user-agent` y `/files`
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Argumentos CLI y variables de entorno
//! - `logger`: Logs por nivel sobre `env_logger`
//! - `error`: Errores fatales de una conexión
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_scratch::config::Config;
//! use http_scratch::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
