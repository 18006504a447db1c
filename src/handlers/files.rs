//! # Handler de Archivos
//! src/handlers/files.rs
//!
//! `/files/<nombre>` devuelve el contenido de `<nombre>` dentro del
//! directorio de datos como `application/octet-stream`.
//!
//! El path pedido se resuelve con `canonicalize` y tiene que quedar dentro
//! del directorio de datos: `..`, links simbólicos hacia afuera y paths
//! absolutos terminan en `PathEscapesRoot`.

use crate::http::response::CONTENT_TYPE_OCTET_STREAM;
use crate::http::{Request, Response};
use crate::router::{split_target, RouteContext, RouteError};
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Tamaño de cada lectura del archivo
pub const FILE_CHUNK_LENGTH: usize = 512;

/// Handler para /files/<nombre>
pub fn files_handler(req: &Request, ctx: &RouteContext) -> Result<Response, RouteError> {
    let (_, name) = split_target(req.target());

    if name.is_empty() {
        return Err(RouteError::MissingFileName);
    }

    let path = resolve_under_root(&ctx.directory, name)?;
    let content = read_file_chunked(&path)?;

    Ok(Response::ok()
        .with_content_type(CONTENT_TYPE_OCTET_STREAM)
        .with_body_bytes(content)
        .build())
}

/// Resuelve `name` relativo a `root`, rechazando lo que quede afuera
fn resolve_under_root(root: &Path, name: &str) -> Result<PathBuf, RouteError> {
    let root = root.canonicalize().map_err(|source| RouteError::FileNotFound {
        path: root.to_path_buf(),
        source,
    })?;

    let candidate = root.join(name);
    let resolved = candidate
        .canonicalize()
        .map_err(|source| RouteError::FileNotFound {
            path: candidate.clone(),
            source,
        })?;

    if !resolved.starts_with(&root) {
        return Err(RouteError::PathEscapesRoot(resolved));
    }

    Ok(resolved)
}

/// Lee el archivo completo en bloques de `FILE_CHUNK_LENGTH` bytes
///
/// Termina al llegar a EOF; cualquier otro error corta la lectura.
pub fn read_file_chunked(path: &Path) -> Result<Vec<u8>, RouteError> {
    let mut file = File::open(path).map_err(|source| RouteError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = Vec::new();
    let mut chunk = [0u8; FILE_CHUNK_LENGTH];

    loop {
        let read = match file.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(RouteError::FileRead {
                    path: path.to_path_buf(),
                    offset: data.len(),
                    source,
                })
            }
        };

        data.extend_from_slice(&chunk[..read]);
        debug!("dataRead: {}, cursor: {}", read, data.len());
    }

    Ok(data)
}
