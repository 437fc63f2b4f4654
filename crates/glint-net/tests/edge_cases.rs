//! Edge case tests for glint-net
//!
//! File-backed and HTTP loads through the default ResourceLoader.

use glint_net::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;

const PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glint-net-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Serve a single HTTP response on a local port, returning the URL to fetch
fn serve_once(status: &str, content_type: &str, body: &'static [u8]) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
    });

    Url::parse(&format!("http://{addr}/icons/a.png")).unwrap()
}

// ============================================================================
// FILE LOADS
// ============================================================================

#[test]
fn test_file_png_loads() {
    let path = scratch_file("ok.png", PNG);
    let url = Url::from_file_path(&path).unwrap();

    let loader = ResourceLoader::new().unwrap();
    let image = smol::block_on(loader.fetch(url.clone())).unwrap();

    assert_eq!(image.url, url);
    assert_eq!(image.format, ImageFormat::Png);
    assert_eq!(image.byte_len, PNG.len());
}

#[test]
fn test_file_svg_loads() {
    let path = scratch_file("ok.svg", br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"></svg>"#);
    let url = Url::from_file_path(&path).unwrap();

    let loader = ResourceLoader::new().unwrap();
    let image = smol::block_on(loader.fetch(url)).unwrap();
    assert_eq!(image.format, ImageFormat::Svg);
}

#[test]
fn test_file_not_an_image() {
    let path = scratch_file("page.png", b"<html><body>oops</body></html>");
    let url = Url::from_file_path(&path).unwrap();

    let loader = ResourceLoader::new().unwrap();
    let err = smol::block_on(loader.fetch(url)).unwrap_err();
    assert!(matches!(err, LoadError::NotAnImage { .. }));
}

#[test]
fn test_file_missing() {
    let path = std::env::temp_dir().join("glint-net-definitely-missing/none.png");
    let url = Url::from_file_path(&path).unwrap();

    let loader = ResourceLoader::new().unwrap();
    let err = smol::block_on(loader.fetch(url)).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

// ============================================================================
// SCHEMES
// ============================================================================

#[test]
fn test_data_scheme_unsupported() {
    let loader = ResourceLoader::new().unwrap();
    let url = Url::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
    let err = smol::block_on(loader.fetch(url)).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedScheme(ref s) if s == "data"));
    assert_eq!(err.to_string(), "Unsupported scheme: data");
}

#[test]
fn test_fetcher_by_reference() {
    fn fetch_via<F: ImageFetcher>(fetcher: F, url: Url) -> LoadFuture {
        fetcher.fetch(url)
    }

    let path = scratch_file("ref.png", PNG);
    let loader = ResourceLoader::new().unwrap();
    let result = smol::block_on(fetch_via(&loader, Url::from_file_path(&path).unwrap()));
    assert!(result.is_ok());
}

// ============================================================================
// HTTP LOADS
// ============================================================================

#[test]
fn test_http_404_is_failure() {
    let url = serve_once("404 Not Found", "text/html", b"<h1>Not Found</h1>");
    let loader = ResourceLoader::new().unwrap();
    let err = smol::block_on(loader.fetch(url)).unwrap_err();
    assert!(matches!(err, LoadError::HttpError { status: 404 }));
}

#[test]
fn test_http_html_body_not_an_image() {
    let url = serve_once("200 OK", "text/html", b"<!DOCTYPE html><p>soft 404</p>");
    let loader = ResourceLoader::new().unwrap();
    let err = smol::block_on(loader.fetch(url)).unwrap_err();
    assert!(matches!(err, LoadError::NotAnImage { .. }));
}

#[test]
fn test_http_png_loads() {
    let url = serve_once("200 OK", "image/png", PNG);
    let loader = ResourceLoader::new().unwrap();
    let image = smol::block_on(loader.fetch(url.clone())).unwrap();
    assert_eq!(image.url, url);
    assert_eq!(image.format, ImageFormat::Png);
    assert_eq!(image.byte_len, PNG.len());
}
