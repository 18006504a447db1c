//! # Lectura de Requests
//! src/http/reader.rs
//!
//! Lee una conexión en bloques de tamaño fijo y acumula los bytes hasta
//! encontrar el terminador `\r\n\r\n` o superar el tamaño máximo.
//!
//! Solo se acumulan los bytes realmente leídos en cada bloque; el resto del
//! buffer de lectura nunca llega al request. El terminador se busca al final
//! de lo acumulado, así que no importa cómo el transporte corte los datos.
//!
//! No se consulta `Content-Length`: un request termina con sus headers.

use log::debug;
use std::io::{self, Read};
use thiserror::Error;

/// Tamaño de cada lectura del socket
pub const REQUEST_CHUNK_LENGTH: usize = 1024;

/// Tamaño máximo de un request (1 MiB)
pub const REQUEST_MAX_LENGTH: usize = 1024 * 1024;

/// Fin del bloque de headers
pub const REQUEST_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Errores de lectura / framing
#[derive(Debug, Error)]
pub enum ReadError {
    /// Falla del transporte
    #[error("Error reading request at len {offset}")]
    Io {
        offset: usize,
        #[source]
        source: io::Error,
    },

    /// El cliente cerró la conexión antes de enviar el terminador
    #[error("Connection closed at len {offset} before the end of the request headers")]
    ConnectionClosed { offset: usize },

    /// Se superó el máximo sin encontrar el terminador
    #[error("Request exceeds {limit} bytes without a header terminator")]
    Oversized { limit: usize },
}

/// Bytes crudos de un request completo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    bytes: Vec<u8>,
    length: usize,
}

impl RawRequest {
    pub fn new(bytes: Vec<u8>) -> Self {
        let length = bytes.len();
        Self { bytes, length }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Lector de requests con límites configurables
#[derive(Debug, Clone, Copy)]
pub struct RequestReader {
    chunk_length: usize,
    max_length: usize,
}

impl RequestReader {
    /// Crea un lector con tamaño de bloque y máximo propios
    ///
    /// Un `chunk_length` de 0 se sube a 1.
    pub fn new(chunk_length: usize, max_length: usize) -> Self {
        Self {
            chunk_length: chunk_length.max(1),
            max_length,
        }
    }

    /// Lector con el máximo indicado y bloques de 1024 bytes
    pub fn with_max_length(max_length: usize) -> Self {
        Self::new(REQUEST_CHUNK_LENGTH, max_length)
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Lee un request completo desde la conexión
    ///
    /// # Retorna
    ///
    /// * `Ok(RawRequest)` - Bytes recibidos, terminando en `\r\n\r\n`
    /// * `Err(ReadError)` - Falla de lectura, cierre prematuro o request demasiado grande
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_scratch::http::RequestReader;
    ///
    /// let mut input: &[u8] = b"GET / HTTP/1.1\r\n\r\n";
    /// let raw = RequestReader::default().read_request(&mut input).unwrap();
    /// assert_eq!(raw.len(), 18);
    /// ```
    pub fn read_request<R: Read>(&self, connection: &mut R) -> Result<RawRequest, ReadError> {
        let mut accumulated: Vec<u8> = Vec::new();
        let mut chunk = vec![0u8; self.chunk_length];

        loop {
            let chunk_length = match connection.read(&mut chunk) {
                Ok(0) => {
                    return Err(ReadError::ConnectionClosed {
                        offset: accumulated.len(),
                    })
                }
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(ReadError::Io {
                        offset: accumulated.len(),
                        source: e,
                    })
                }
            };

            accumulated.extend_from_slice(&chunk[..chunk_length]);
            debug!("chunk de {} bytes (total {})", chunk_length, accumulated.len());

            if accumulated.ends_with(REQUEST_TERMINATOR) {
                return Ok(RawRequest::new(accumulated));
            }

            if accumulated.len() > self.max_length {
                return Err(ReadError::Oversized {
                    limit: self.max_length,
                });
            }
        }
    }
}

impl Default for RequestReader {
    fn default() -> Self {
        Self::new(REQUEST_CHUNK_LENGTH, REQUEST_MAX_LENGTH)
    }
}
