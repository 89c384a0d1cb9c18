// src/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::HTTP_TIMEOUT_SECS;

/// Split "http://host[:port]/path" into (host, port, path).
fn split_url(url: &str) -> Result<(String, u16, String), Box<dyn std::error::Error>> {
    let rest = url
        .strip_prefix("http://")
        .ok_or("Only http:// URLs are supported")?;

    let (hostport, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = match hostport.rsplit_once(':') {
        Some((h, p)) => (h, p.parse::<u16>()?),
        None => (hostport, 80),
    };
    if host.is_empty() {
        return Err("Missing host in URL".into());
    }
    Ok((s!(host), port, s!(path)))
}

pub fn http_get(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let (host, port, path) = split_url(url)?;

    let mut s = TcpStream::connect((host.as_str(), port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: gridmap/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_host_port_and_path() {
        let (h, p, path) = split_url("http://example.com:8080/data/games.csv").unwrap();
        assert_eq!(h, "example.com");
        assert_eq!(p, 8080);
        assert_eq!(path, "/data/games.csv");
    }

    #[test]
    fn defaults_port_and_path() {
        let (h, p, path) = split_url("http://example.com").unwrap();
        assert_eq!(h, "example.com");
        assert_eq!(p, 80);
        assert_eq!(path, "/");
    }

    #[test]
    fn rejects_non_http() {
        assert!(split_url("https://example.com/x").is_err());
        assert!(split_url("ftp://example.com/x").is_err());
    }
}
