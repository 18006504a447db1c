//! # Handlers del Servidor
//!
//! Cada handler recibe un Request ya parseado y el contexto del router, y
//! retorna una Response o un `RouteError`.
//!
//! - **basic**: `/echo/<texto>` y `/user-agent`
//! - **files**: `/files/<nombre>` dentro del directorio de datos

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;
