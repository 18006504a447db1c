//! # Construcción de Respuestas HTTP
//!
//! Este módulo construye respuestas HTTP/1.1 y las serializa una sola vez
//! a los bytes exactos que se envían por el socket.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 6\r\n
//! \r\n
//! abc123
//! ```
//!
//! El bloque de headers siempre termina con exactamente una línea vacía.
//! `Content-Length` y el body solo aparecen si el body no está vacío.
//! La respuesta 404 es un literal fijo: `HTTP/1.1 404 Not Found \r\n\r\n`.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_scratch::http::{Response, StatusCode};
//!
//! let response = Response::builder(StatusCode::OK)
//!     .with_content_type("text/plain")
//!     .with_body("abc123")
//!     .build();
//!
//! assert_eq!(
//!     response.as_bytes(),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\n\r\nabc123"
//! );
//! ```

use super::StatusCode;

/// Versión del protocolo en la status line
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Terminador de línea
pub const EOL: &str = "\r\n";

pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Sin header `Content-Type`
pub const CONTENT_TYPE_NONE: &str = "";

/// Mensaje completo de la respuesta 404
pub const NOT_FOUND_MESSAGE: &[u8] = b"HTTP/1.1 404 Not Found \r\n\r\n";

/// Respuesta HTTP finalizada (inmutable)
///
/// El mensaje serializado se calcula una vez en [`ResponseBuilder::build`]
/// o en [`Response::not_found`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,

    /// String vacío = no se emite `Content-Type`
    content_type: String,

    body: Vec<u8>,

    /// Siempre igual a `body.len()`
    content_length: usize,

    /// Bytes exactos que se escriben en el socket
    message: Vec<u8>,
}

/// Builder de respuestas
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Establece el `Content-Type` (string vacío = sin header)
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Establece el body desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el body desde bytes (archivos binarios)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Finaliza la respuesta calculando el mensaje serializado
    pub fn build(self) -> Response {
        let message = serialize(self.status, &self.content_type, &self.body);
        let content_length = self.body.len();

        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
            content_length,
            message,
        }
    }
}

impl Response {
    /// Inicia una respuesta con el código indicado, sin headers ni body
    pub fn builder(status: StatusCode) -> ResponseBuilder {
        ResponseBuilder {
            status,
            content_type: CONTENT_TYPE_NONE.to_string(),
            body: Vec::new(),
        }
    }

    /// Atajo para `Response::builder(StatusCode::OK)`
    pub fn ok() -> ResponseBuilder {
        Self::builder(StatusCode::OK)
    }

    /// Crea una respuesta `text/plain` exitosa
    ///
    /// # Ejemplo
    /// ```
    /// use http_scratch::http::Response;
    ///
    /// let response = Response::text("hola");
    /// assert_eq!(response.content_length(), 4);
    /// ```
    pub fn text(body: &str) -> Self {
        Self::ok()
            .with_content_type(CONTENT_TYPE_TEXT_PLAIN)
            .with_body(body)
            .build()
    }

    /// Respuesta 404 fija, sin headers ni body
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            content_type: CONTENT_TYPE_NONE.to_string(),
            body: Vec::new(),
            content_length: 0,
            message: NOT_FOUND_MESSAGE.to_vec(),
        }
    }

    /// Bytes listos para enviar por el socket
    pub fn as_bytes(&self) -> &[u8] {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// `None` si la respuesta no lleva `Content-Type`
    pub fn content_type(&self) -> Option<&str> {
        if self.content_type.is_empty() {
            None
        } else {
            Some(&self.content_type)
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn content_length(&self) -> usize {
        self.content_length
    }
}

/// Serializa status line, headers opcionales y body
///
/// 1. `HTTP/1.1 <code> <reason>\r\n`
/// 2. `Content-Type: <type>\r\n` si el tipo no está vacío
/// 3. `Content-Length: <len>\r\n` si el body no está vacío
/// 4. `\r\n` (una única línea vacía)
/// 5. body
fn serialize(status: StatusCode, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut head = format!(
        "{} {} {}{}",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase(),
        EOL
    );

    if !content_type.is_empty() {
        head.push_str(&format!("Content-Type: {}{}", content_type, EOL));
    }

    if !body.is_empty() {
        head.push_str(&format!("Content-Length: {}{}", body.len(), EOL));
    }

    head.push_str(EOL);

    let mut message = Vec::with_capacity(head.len() + body.len());
    message.extend_from_slice(head.as_bytes());
    message.extend_from_slice(body);
    message
}
