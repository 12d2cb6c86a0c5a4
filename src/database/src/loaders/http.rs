// Very minimal HTTP GET over plain TCP, no TLS.
// Uses HTTP/1.0 so the server closes the connection at the end (no chunked transfer).

use crate::loaders::{LoadError, SourceResponse};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use url::Host;

/// Perform a plain HTTP GET request and return the status with the raw body.
///
/// * `host` – hostname or IP literal (no protocol, no port)
/// * `port` – usually 80 for HTTP
/// * `path` – path + query string starting with `/`
///
/// Non-success statuses are returned as-is; deciding what they mean is up
/// to the caller. The body is left undecoded.
pub async fn http_get(
    host: &Host<String>,
    port: u16,
    path: &str,
) -> Result<SourceResponse, LoadError> {
    let mut stream = match host {
        Host::Domain(domain) => TcpStream::connect((domain.as_str(), port)).await?,
        Host::Ipv4(addr) => TcpStream::connect((*addr, port)).await?,
        Host::Ipv6(addr) => TcpStream::connect((*addr, port)).await?,
    };

    // Host displays IPv6 literals in brackets, as the header expects
    let request = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: roster_report/{}\r\n\
         Accept: application/json\r\nConnection: close\r\n\r\n",
        path,
        host,
        env!("CARGO_PKG_VERSION")
    );
    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;

    parse_response(&buf)
}

fn parse_response(raw: &[u8]) -> Result<SourceResponse, LoadError> {
    let header_end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| LoadError::MalformedResponse("missing end of headers".to_string()))?;

    let headers = String::from_utf8_lossy(&raw[..header_end]);
    let status_line = headers.lines().next().unwrap_or_default();
    let status = parse_status_line(status_line).ok_or_else(|| {
        LoadError::MalformedResponse(format!("bad status line: {:?}", status_line))
    })?;

    Ok(SourceResponse {
        status,
        body: raw[header_end + 4..].to_vec(),
    })
}

fn parse_status_line(line: &str) -> Option<u16> {
    let mut parts = line.split_whitespace();

    if !parts.next()?.starts_with("HTTP/") {
        return None;
    }

    parts.next()?.parse().ok()
}
