//! # Logs por Nivel
//! src/logger.rs
//!
//! Inicializa `env_logger` como backend de las macros de `log`.
//!
//! Formato de cada línea: `[LEVEL] mensaje`, con LEVEL en DEBUG, INFO,
//! WARNING o ERROR. Los mensajes DEBUG solo salen con `--verbose`
//! (o si `RUST_LOG` lo pide explícitamente).

use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// Token que aparece entre corchetes al inicio de cada línea
pub fn level_token(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug | Level::Trace => "DEBUG",
    }
}

/// Filtro por defecto según la verbosidad
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Línea completa tal como se escribe
pub fn format_line(level: Level, message: &str) -> String {
    format!("[{}] {}", level_token(level), message)
}

/// Inicializa el logger global
///
/// Llamarlo más de una vez no tiene efecto.
pub fn init(verbose: bool) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(record.level(), &record.args().to_string())
            )
        })
        .try_init();
}
