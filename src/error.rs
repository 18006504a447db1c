//! # Errores por Conexión
//! src/error.rs
//!
//! Cualquier error de una conexión cierra solo esa conexión; el servidor
//! sigue aceptando clientes.
//!
//! | Capa       | Error          | Qué pasa                          |
//! |------------|----------------|-----------------------------------|
//! | Transporte | `Read`/`Write` | se cierra la conexión             |
//! | Framing    | `Read`         | se cierra la conexión             |
//! | Parsing    | `Parse`        | se cierra la conexión sin respuesta |
//! | Routing    | `RouteError`   | se responde 404 (no llega aquí)   |

use crate::http::{ParseError, ReadError};
use std::io;
use thiserror::Error;

/// Error fatal para una conexión
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Error reading request: {0}")]
    Read(#[from] ReadError),

    #[error("Parsing request: {0}")]
    Parse(#[from] ParseError),

    #[error("Error sending response: {0}")]
    Write(#[from] io::Error),
}
