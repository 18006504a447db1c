//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! ```
//!
//! ## Pasos
//!
//! 1. Separar los bytes por `\r\n` en líneas
//! 2. **Headers**: cada línea después de la primera con forma `Nombre: valor`.
//!    Las líneas malformadas se registran como warning y se ignoran.
//! 3. **Request Line**: `METHOD /target VERSION`. Solo GET está implementado.

use super::reader::RawRequest;
use log::{debug, warn};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Terminador de línea dentro del request
const LINE_TERMINATOR: &str = "\r\n";

/// Métodos HTTP reconocidos (RFC 7231, sección 4.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::CONNECT => "CONNECT",
            Method::OPTIONS => "OPTIONS",
            Method::TRACE => "TRACE",
        }
    }

    /// Solo GET tiene handlers
    pub fn is_implemented(&self) -> bool {
        matches!(self, Method::GET)
    }
}

impl FromStr for Method {
    type Err = ParseError;

    /// Sensible a mayúsculas: `get` es un método inválido
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "CONNECT" => Ok(Method::CONNECT),
            "OPTIONS" => Ok(Method::OPTIONS),
            "TRACE" => Ok(Method::TRACE),
            _ => Err(ParseError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores fatales del parsing
///
/// Un header malformado no es un error: solo se ignora esa línea.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// La request line está vacía
    #[error("Empty request")]
    EmptyRequest,

    /// La request line no trae target
    #[error("Missing request target")]
    MissingTarget,

    /// El target no empieza con `/`
    #[error("Invalid request target '{0}'")]
    InvalidTarget(String),

    /// Método reconocido pero sin implementar
    #[error("Non implemented HTTP method '{0}'")]
    NotImplemented(Method),

    /// Token que no es un método HTTP
    #[error("invalid HTTP method '{0}'. Check RFC 7231 section 4.3")]
    InvalidMethod(String),
}

/// Request HTTP parseado
///
/// Se construye una vez por conexión y no cambia después de `parse`.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Siempre empieza con `/`
    target: String,

    /// Bytes tal como llegaron del socket
    raw: Vec<u8>,

    /// Líneas separadas por `\r\n` (nunca vacío)
    lines: Vec<String>,

    /// Nombre del header (tal cual llegó) → valor
    headers: HashMap<String, String>,

    /// Bytes leídos
    length: usize,
}

/// `Nombre: valor`, con el nombre formado solo por letras y guiones
fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z-]+: ").expect("valid header pattern"))
}

impl Request {
    /// Parsea un request desde bytes crudos
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_scratch::http::Request;
    ///
    /// let request = Request::parse(b"GET /echo/hola HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
    ///
    /// assert_eq!(request.target(), "/echo/hola");
    /// assert_eq!(request.header("Host"), Some("x"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        Self::from_raw(RawRequest::new(buffer.to_vec()))
    }

    /// Parsea el resultado de [`RequestReader`](super::RequestReader)
    pub fn from_raw(raw: RawRequest) -> Result<Self, ParseError> {
        let length = raw.len();
        let raw = raw.into_bytes();

        let text = String::from_utf8_lossy(&raw);
        let lines: Vec<String> = text.split(LINE_TERMINATOR).map(str::to_string).collect();

        let request_line = match lines.first() {
            Some(line) if !line.trim().is_empty() => line.clone(),
            _ => return Err(ParseError::EmptyRequest),
        };

        let headers = Self::parse_headers(&lines[1..]);
        let (method, target) = Self::parse_request_line(&request_line)?;

        for line in &lines {
            debug!("{}", line);
        }

        Ok(Request {
            method,
            target,
            raw,
            lines,
            headers,
            length,
        })
    }

    /// Parsea los headers, ignorando líneas vacías y malformadas
    ///
    /// Si un header se repite gana la última aparición.
    fn parse_headers(lines: &[String]) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.is_empty() {
                continue;
            }

            if !header_pattern().is_match(line) {
                warn!("Unable to parse header '{}'", line);
                continue;
            }

            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        headers
    }

    /// Parsea la request line: `METHOD /target VERSION`
    fn parse_request_line(line: &str) -> Result<(Method, String), ParseError> {
        let mut tokens = line.split(' ');

        let method: Method = tokens.next().unwrap_or_default().parse()?;
        if !method.is_implemented() {
            return Err(ParseError::NotImplemented(method));
        }

        let target = match tokens.next() {
            Some(target) if !target.is_empty() => target,
            _ => return Err(ParseError::MissingTarget),
        };

        if !target.starts_with('/') {
            return Err(ParseError::InvalidTarget(target.to_string()));
        }

        Ok((method, target.to_string()))
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> Method {
        self.method
    }

    /// Path pedido, tal cual aparece en la request line
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header (el nombre distingue mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.target(), "/");
        assert_eq!(request.len(), raw.len());
        assert_eq!(request.raw(), raw);
    }

    #[test]
    fn test_lines_are_split_on_crlf() {
        let request = Request::parse(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();

        assert_eq!(request.lines(), &["GET / HTTP/1.1", "Host: x", "", ""]);
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: test-client/1.0\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("User-Agent"), Some("test-client/1.0"));
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn test_header_value_is_verbatim() {
        let raw = b"GET / HTTP/1.1\r\nX-Note:   spaced: value  \r\n\r\n";
        let request = Request::parse(raw).unwrap();

        // solo se corta en el primer ": "
        assert_eq!(request.header("X-Note"), Some("  spaced: value  "));
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let raw = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("user-agent"), Some("lower"));
        assert_eq!(request.header("User-Agent"), None);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let raw = b"GET / HTTP/1.1\r\nAccept: a\r\nAccept: b\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Accept"), Some("b"));
    }

    #[test]
    fn test_malformed_headers_are_skipped() {
        let raw = b"GET / HTTP/1.1\r\nBad_Header: 1\r\nnocolon\r\nX2: digits\r\nNoSpace:x\r\nHost: ok\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("Host"), Some("ok"));
    }

    #[test]
    fn test_empty_header_value() {
        let raw = b"GET / HTTP/1.1\r\nUser-Agent: \r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("User-Agent"), Some(""));
    }

    // ==================== Métodos ====================

    #[test]
    fn test_not_implemented_methods() {
        for method in ["HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE"] {
            let raw = format!("{} / HTTP/1.1\r\n\r\n", method);
            let result = Request::parse(raw.as_bytes());

            match result {
                Err(ParseError::NotImplemented(m)) => assert_eq!(m.as_str(), method),
                other => panic!("{}: unexpected {:?}", method, other),
            }
        }
    }

    #[test]
    fn test_invalid_method() {
        let result = Request::parse(b"FETCH / HTTP/1.1\r\n\r\n");
        assert_eq!(result.unwrap_err(), ParseError::InvalidMethod("FETCH".to_string()));

        let result = Request::parse(b"get / HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidMethod(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::NotImplemented(Method::POST).to_string(),
            "Non implemented HTTP method 'POST'"
        );
        assert!(ParseError::InvalidMethod("X".into())
            .to_string()
            .starts_with("invalid HTTP method 'X'"));
    }

    // ==================== Request line ====================

    #[test]
    fn test_empty_request() {
        assert_eq!(Request::parse(b"").unwrap_err(), ParseError::EmptyRequest);
        assert_eq!(
            Request::parse(b"\r\n\r\n").unwrap_err(),
            ParseError::EmptyRequest
        );
    }

    #[test]
    fn test_missing_target() {
        let result = Request::parse(b"GET\r\n\r\n");
        assert_eq!(result.unwrap_err(), ParseError::MissingTarget);
    }

    #[test]
    fn test_invalid_target() {
        let result = Request::parse(b"GET echo/abc HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidTarget(_))));
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("GET".parse::<Method>(), Ok(Method::GET));
        assert_eq!("TRACE".parse::<Method>(), Ok(Method::TRACE));
        assert!(Method::GET.is_implemented());
        assert!(!Method::HEAD.is_implemented());
    }
}
