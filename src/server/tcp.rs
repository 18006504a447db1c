//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio thread:
//!
//! ```text
//! RequestReader → Request::from_raw → Router → Response → socket
//! ```
//!
//! Los threads solo comparten el router (de solo lectura) y el lector de
//! requests (`Copy`). Un error en una conexión cierra esa conexión y nada más.

use crate::config::Config;
use crate::error::ConnectionError;
use crate::http::{Request, RequestReader};
use crate::router::{RouteContext, Router};
use log::{debug, error, info};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    reader: RequestReader,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let router = Router::with_default_routes(RouteContext::new(config.directory.clone()));
        let reader = RequestReader::with_max_length(config.max_request_bytes);

        Self {
            config,
            router: Arc::new(router),
            reader,
            listener: None,
        }
    }

    /// Abre el socket de escucha sin empezar a aceptar conexiones
    ///
    /// Retorna la dirección real (útil con puerto 0).
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let listener = self.open_listener()?;
        let local_addr = listener.local_addr()?;
        self.listener = Some(listener);

        Ok(local_addr)
    }

    fn open_listener(&self) -> io::Result<TcpListener> {
        let listener = TcpListener::bind(self.config.address())?;
        info!("Servidor escuchando en {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Acepta conexiones para siempre; solo retorna si el bind falla
    pub fn run(&mut self) -> io::Result<()> {
        let listener = match self.listener.take() {
            Some(listener) => listener,
            None => self.open_listener()?,
        };

        debug!("Modo concurrente: un thread por conexion");

        for stream in listener.incoming() {
            match stream {
                Ok(mut stream) => {
                    let router = Arc::clone(&self.router);
                    let reader = self.reader;

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    debug!("Nueva conexión desde: {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(&mut stream, &reader, &router) {
                            error!("{} ({})", e, peer_addr);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa un request completo sobre una conexión
    ///
    /// Un error de routing se responde con 404; los errores de lectura,
    /// parsing o escritura se retornan y la conexión se cierra sin respuesta.
    pub fn handle_connection<S: Read + Write>(
        stream: &mut S,
        reader: &RequestReader,
        router: &Router,
    ) -> Result<(), ConnectionError> {
        let raw = reader.read_request(stream)?;
        debug!("{} bytes recibidos", raw.len());

        let request = Request::from_raw(raw)?;
        debug!("{} {}", request.method(), request.target());

        let response = router.route(&request);

        stream.write_all(response.as_bytes())?;
        stream.flush()?;

        debug!("{} ({} bytes de body)", response.status(), response.content_length());

        Ok(())
    }
}
