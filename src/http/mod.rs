//! # Módulo HTTP
//!
//! Este módulo implementa HTTP/1.1 desde cero, sin usar librerías de alto
//! nivel. Incluye:
//!
//! - Lectura de requests desde el socket (framing por `\r\n\r\n`)
//! - Parsing de la request line y los headers
//! - Construcción de responses byte a byte
//! - Códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! GET /user-agent HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: foobar/1.2.3\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 12\r\n
//! \r\n
//! foobar/1.2.3
//! ```

pub mod reader;    // Lectura por bloques del socket
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use reader::{RawRequest, ReadError, RequestReader};
pub use request::{Method, ParseError, Request};
pub use response::{Response, ResponseBuilder};
pub use status::StatusCode;
