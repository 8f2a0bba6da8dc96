// ABOUTME: HTTP resource fetching for listing and detail pages.
// ABOUTME: Handles SSRF guarding, content-length limits, and charset-aware body decoding.

use std::collections::HashMap;
use std::net::IpAddr;

use bytes::Bytes;
use ipnet::{Ipv4Net, Ipv6Net};

use crate::error::ScrapeError;

/// Maximum allowed content length (10 MB). Career pages are far smaller;
/// anything beyond this is not a page we want to parse.
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub allow_private_networks: bool,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from the
    /// content-type header and falling back to detection. Lithuanian sites
    /// occasionally still serve windows-1257.
    pub fn text_utf8(&self, content_type_hint: Option<&str>) -> Result<String, ScrapeError> {
        let ct = content_type_hint.or(self.content_type.as_deref());
        Ok(decode_body(&self.body, ct))
    }
}

/// Check if an IP address is in a private/reserved range.
pub(crate) fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => {
            // RFC1918 private ranges
            let private_10: Ipv4Net = "10.0.0.0/8".parse().unwrap();
            let private_172: Ipv4Net = "172.16.0.0/12".parse().unwrap();
            let private_192: Ipv4Net = "192.168.0.0/16".parse().unwrap();
            // Loopback
            let loopback: Ipv4Net = "127.0.0.0/8".parse().unwrap();
            // Link-local
            let link_local: Ipv4Net = "169.254.0.0/16".parse().unwrap();

            private_10.contains(ip)
                || private_172.contains(ip)
                || private_192.contains(ip)
                || loopback.contains(ip)
                || link_local.contains(ip)
        }
        IpAddr::V6(ip) => {
            if ip.is_loopback() {
                return true;
            }
            let unique_local: Ipv6Net = "fc00::/7".parse().unwrap();
            let link_local: Ipv6Net = "fe80::/10".parse().unwrap();

            unique_local.contains(ip) || link_local.contains(ip)
        }
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Reject URLs whose host resolves to a private/reserved address.
async fn check_ssrf(parsed_url: &url::Url, url: &str, op: &str) -> Result<(), ScrapeError> {
    let Some(host) = parsed_url.host_str() else {
        return Ok(());
    };

    if let Ok(ip) = host.parse::<IpAddr>() {
        if is_private_ip(&ip) {
            return Err(ScrapeError::ssrf(
                url,
                op,
                Some(anyhow::anyhow!("private IP addresses are not allowed")),
            ));
        }
        return Ok(());
    }

    // Host is a hostname; resolve it and check all addresses.
    let port = parsed_url
        .port()
        .unwrap_or(if parsed_url.scheme() == "https" { 443 } else { 80 });
    let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
        ScrapeError::fetch(url, op, Some(anyhow::anyhow!("DNS lookup failed: {}", e)))
    })?;

    for socket_addr in addrs {
        if is_private_ip(&socket_addr.ip()) {
            return Err(ScrapeError::ssrf(
                url,
                op,
                Some(anyhow::anyhow!("private IP addresses are not allowed")),
            ));
        }
    }
    Ok(())
}

/// Fetch a page from the given URL.
///
/// Validates the URL, applies the SSRF guard unless private networks are
/// allowed, sends the request with the configured headers, and enforces the
/// content-length cap and a 200-only status policy. Timeouts are surfaced
/// as `ErrorCode::Timeout` so callers can distinguish them in logs, though
/// the engine treats them like any other fetch failure.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    if !opts.allow_private_networks {
        check_ssrf(&parsed_url, url, "Fetch").await?;
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ScrapeError::timeout(url, "Fetch", Some(anyhow::anyhow!("request timed out: {}", e)))
        } else {
            ScrapeError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
        }
    })?;

    // Check Content-Length before reading the body.
    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            ScrapeError::timeout(url, "Fetch", Some(anyhow::anyhow!("body read timed out: {}", e)))
        } else {
            ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("failed to read body: {}", e)),
            )
        }
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    if status != 200 {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status)),
        ));
    }

    Ok(FetchResult {
        status,
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}
