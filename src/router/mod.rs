//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea el primer segmento del path
//! a un handler.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! - `/` responde 200 sin body
//! - `/<segmento>/<resto>` busca `<segmento>` en la tabla (coincidencia exacta)
//! - Si no hay handler, o el handler falla, se responde 404
//!
//! La tabla se arma una vez al iniciar y después solo se lee, así que se
//! comparte entre threads con un `Arc` sin locks.

use crate::handlers;
use crate::http::{Request, Response};
use log::warn;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tipo de función handler
///
/// Un handler recibe el Request y el contexto del router, y retorna una
/// Response o un error de routing (que termina en 404).
pub type Handler = fn(&Request, &RouteContext) -> Result<Response, RouteError>;

/// Datos de solo lectura disponibles para los handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    /// Raíz de los archivos servidos por `/files/`
    pub directory: PathBuf,
}

impl RouteContext {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// Errores de routing y de handlers
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Get Path '{0}' is not implemented.")]
    PathNotImplemented(String),

    #[error("The header '{0}' is not present in the request")]
    HeaderMissing(&'static str),

    #[error("No file name after 'files/'")]
    MissingFileName,

    #[error("Path '{0}' resolves outside the data directory")]
    PathEscapesRoot(PathBuf),

    #[error("File '{}' not found", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error occured while reading file '{}', at index {offset}", path.display())]
    FileRead {
        path: PathBuf,
        offset: usize,
        #[source]
        source: io::Error,
    },
}

/// Separa un target en (primer segmento, resto)
///
/// El primer segmento es el primero no vacío; el resto es todo lo que
/// sigue a la `/` posterior a ese segmento.
///
/// # Ejemplo
/// ```
/// use http_scratch::router::split_target;
///
/// assert_eq!(split_target("/echo/a/b"), ("echo", "a/b"));
/// assert_eq!(split_target("/user-agent"), ("user-agent", ""));
/// ```
pub fn split_target(target: &str) -> (&str, &str) {
    let trimmed = target.trim_start_matches('/');
    trimmed.split_once('/').unwrap_or((trimmed, ""))
}

/// Router que mapea segmentos a handlers
pub struct Router {
    /// segmento → handler
    routes: Vec<(String, Handler)>,
    context: RouteContext,
}

impl Router {
    /// Crea un router vacío
    pub fn new(context: RouteContext) -> Self {
        Self {
            routes: Vec::new(),
            context,
        }
    }

    /// Router con las rutas del servidor: `echo`, `user-agent` y `files`
    pub fn with_default_routes(context: RouteContext) -> Self {
        let mut router = Self::new(context);
        router.register("echo", handlers::echo_handler);
        router.register("user-agent", handlers::user_agent_handler);
        router.register("files", handlers::files_handler);
        router
    }

    /// Registra un handler para un primer segmento
    ///
    /// # Ejemplo
    /// ```
    /// use http_scratch::router::{RouteContext, RouteError, Router};
    /// use http_scratch::http::{Request, Response};
    ///
    /// fn hello_handler(_req: &Request, _ctx: &RouteContext) -> Result<Response, RouteError> {
    ///     Ok(Response::text("hello"))
    /// }
    ///
    /// let mut router = Router::new(RouteContext::new("/tmp"));
    /// router.register("hello", hello_handler);
    /// ```
    pub fn register(&mut self, segment: &str, handler: Handler) {
        self.routes.push((segment.to_string(), handler));
    }

    pub fn context(&self) -> &RouteContext {
        &self.context
    }

    /// Busca y ejecuta el handler para el target del request
    pub fn dispatch(&self, request: &Request) -> Result<Response, RouteError> {
        let target = request.target();

        if target == "/" {
            return Ok(Response::ok().build());
        }

        let (segment, _) = split_target(target);

        match self.routes.iter().find(|(route, _)| route == segment) {
            Some((_, handler)) => handler(request, &self.context),
            None => Err(RouteError::PathNotImplemented(segment.to_string())),
        }
    }

    /// Igual que [`Router::dispatch`], pero cualquier error termina en 404
    ///
    /// # Ejemplo
    /// ```
    /// use http_scratch::router::{RouteContext, Router};
    /// use http_scratch::http::{Request, StatusCode};
    ///
    /// let router = Router::with_default_routes(RouteContext::new("/tmp"));
    /// let request = Request::parse(b"GET /nonexistent HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// assert_eq!(router.route(&request).status(), StatusCode::NOT_FOUND);
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        match self.dispatch(request) {
            Ok(response) => response,
            Err(e) => {
                warn!("Ressource not found at {}: {}", request.target(), e);
                Response::not_found()
            }
        }
    }
}
