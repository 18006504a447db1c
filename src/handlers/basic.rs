//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - /echo/<texto>: devuelve `<texto>` como `text/plain`
//! - /user-agent: devuelve el header `User-Agent` del request

use crate::http::response::CONTENT_TYPE_TEXT_PLAIN;
use crate::http::{Request, Response};
use crate::router::{split_target, RouteContext, RouteError};
use log::debug;

/// Nombre del header que refleja `/user-agent`
pub const KEY_USERAGENT: &str = "User-Agent";

/// Handler para /echo/<texto>
///
/// El body es todo lo que sigue a `echo/`, sin decodificar.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(req: &Request, _ctx: &RouteContext) -> Result<Response, RouteError> {
    let (_, text) = split_target(req.target());

    debug!("echo : {}", text);

    Ok(Response::ok()
        .with_content_type(CONTENT_TYPE_TEXT_PLAIN)
        .with_body(text)
        .build())
}

/// Handler para /user-agent
///
/// Falla con `HeaderMissing` si el header no vino o vino vacío.
pub fn user_agent_handler(req: &Request, _ctx: &RouteContext) -> Result<Response, RouteError> {
    let user_agent = match req.header(KEY_USERAGENT) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(RouteError::HeaderMissing(KEY_USERAGENT)),
    };

    debug!("user-agent : {}", user_agent);

    Ok(Response::text(user_agent))
}
