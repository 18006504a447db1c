//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero con un
//! directorio de datos temporal.

use http_scratch::config::Config;
use http_scratch::server::Server;
use std::fs;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Helper: levanta un servidor sirviendo `directory`
fn start_server(directory: &std::path::Path) -> SocketAddr {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        directory: directory.to_path_buf(),
        ..Config::default()
    };

    let mut server = Server::new(config);
    let addr = server.bind().expect("bind");

    thread::spawn(move || {
        let _ = server.run();
    });

    addr
}

/// Helper: envía bytes crudos y retorna todo lo que responde el servidor
fn send_raw(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(request).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    let _ = stream.read_to_end(&mut response);
    response
}

fn get(addr: SocketAddr, path: &str) -> String {
    let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path);
    String::from_utf8(send_raw(addr, request.as_bytes())).unwrap()
}

#[test]
fn test_root_endpoint() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = get(addr, "/");

    assert_eq!(response, "HTTP/1.1 200 OK\r\n\r\n");
    assert!(!response.contains("Content-Type"));
}

#[test]
fn test_echo_endpoint() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = get(addr, "/echo/abc123");

    assert_eq!(
        response,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\n\r\nabc123"
    );
}

#[test]
fn test_user_agent_endpoint() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = send_raw(
        addr,
        b"GET /user-agent HTTP/1.1\r\nHost: x\r\nUser-Agent: test-client/1.0\r\n\r\n",
    );

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 15\r\n\r\ntest-client/1.0"
    );
}

#[test]
fn test_user_agent_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    assert_eq!(get(addr, "/user-agent"), "HTTP/1.1 404 Not Found \r\n\r\n");
}

#[test]
fn test_not_found() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = send_raw(addr, b"GET /nonexistent HTTP/1.1\r\n\r\n");
    assert_eq!(response, b"HTTP/1.1 404 Not Found \r\n\r\n");
}

// ==================== /files ====================

#[test]
fn test_files_endpoint() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("foo"), b"Hello, World!").unwrap();
    let addr = start_server(dir.path());

    let response = get(addr, "/files/foo");

    assert_eq!(
        response,
        "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 13\r\n\r\nHello, World!"
    );
}

#[test]
fn test_files_binary_content() {
    let dir = TempDir::new().unwrap();
    let content: Vec<u8> = (0..=255u8).cycle().take(5000).collect();
    fs::write(dir.path().join("data.bin"), &content).unwrap();
    let addr = start_server(dir.path());

    let response = send_raw(addr, b"GET /files/data.bin HTTP/1.1\r\n\r\n");

    assert!(response.starts_with(b"HTTP/1.1 200 OK\r\n"));
    assert!(response.ends_with(&content));
}

#[test]
fn test_files_missing_in_empty_root() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = send_raw(addr, b"GET /files/missing.txt HTTP/1.1\r\n\r\n");
    assert_eq!(response, b"HTTP/1.1 404 Not Found \r\n\r\n");
}

#[test]
fn test_files_traversal_is_not_found() {
    let outer = TempDir::new().unwrap();
    fs::write(outer.path().join("secret"), b"secret").unwrap();
    fs::create_dir(outer.path().join("public")).unwrap();
    let addr = start_server(&outer.path().join("public"));

    assert_eq!(get(addr, "/files/../secret"), "HTTP/1.1 404 Not Found \r\n\r\n");
}

// ==================== Métodos ====================

#[test]
fn test_post_closes_connection_without_response() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = send_raw(addr, b"POST / HTTP/1.1\r\n\r\n");
    assert!(response.is_empty());
}

#[test]
fn test_invalid_method_closes_connection() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let response = send_raw(addr, b"FETCH / HTTP/1.1\r\n\r\n");
    assert!(response.is_empty());
}

// ==================== Robustez ====================

#[test]
fn test_server_survives_bad_clients() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    send_raw(addr, b"POST / HTTP/1.1\r\n\r\n");
    drop(TcpStream::connect(addr).unwrap());

    // Request truncado: el cliente cierra su lado antes del terminador
    let mut truncated = TcpStream::connect(addr).unwrap();
    truncated.write_all(b"GET / HTTP/1.1\r\n").unwrap();
    truncated.shutdown(Shutdown::Write).unwrap();
    let mut ignored = Vec::new();
    let _ = truncated.read_to_end(&mut ignored);

    assert_eq!(
        get(addr, "/echo/still-alive"),
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 11\r\n\r\nstill-alive"
    );
}

#[test]
fn test_request_sent_byte_by_byte() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_nodelay(true).unwrap();

    for byte in b"GET /echo/slow HTTP/1.1\r\nHost: x\r\n\r\n" {
        stream.write_all(&[*byte]).unwrap();
    }

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    assert!(response.ends_with(b"\r\n\r\nslow"));
}

#[test]
fn test_concurrent_clients() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(dir.path());

    // Un cliente lento no bloquea a los demás
    let mut stalled = TcpStream::connect(addr).unwrap();
    stalled.write_all(b"GET /echo/stalled HTTP/1.1\r\n").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| thread::spawn(move || get(addr, &format!("/echo/{}", i))))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let response = handle.join().unwrap();
        assert!(response.ends_with(&format!("\r\n\r\n{}", i)), "client {}", i);
    }

    drop(stalled);
}
