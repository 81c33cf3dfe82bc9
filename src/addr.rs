//! Server address specification parsing.
//!
//! A user configures the news server as a single string such as
//! `news.example.org`, `news.example.org:119`, `2001:db8::1` or
//! `[2001:db8::1]:119`. This module turns that string into a validated
//! host/port pair. The tricky part is telling a bare IPv6 literal apart
//! from a `host:port` pair, which is why bracket syntax exists at all.

use crate::error::{Error, MalformedAddressReason, Result};
use std::fmt;
use std::str::FromStr;

/// A parsed server address: a host plus an optional port.
///
/// The host is stored without brackets and is guaranteed non-empty.
/// Values are plain data owned by the caller; parsing performs no I/O
/// and no name resolution.
///
/// # Example
///
/// ```
/// use newspost_rs::ServerAddr;
///
/// let addr = ServerAddr::parse("news.example.org:42", Some(119)).unwrap();
/// assert_eq!(addr.host(), "news.example.org");
/// assert_eq!(addr.port(), Some(42));
///
/// // A raw IPv6 literal with no brackets is a bare host, never host:port
/// let addr = ServerAddr::parse("2001:db8::1", Some(119)).unwrap();
/// assert_eq!(addr.host(), "2001:db8::1");
/// assert_eq!(addr.port(), Some(119));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddr {
    host: String,
    port: Option<u16>,
}

impl ServerAddr {
    /// Parse an address specification, falling back to `default_port`
    /// when the specification carries no explicit port.
    ///
    /// The specification is matched against these rules, in order:
    ///
    /// 1. `[host]` or `[host]:port` — bracketed literal; the brackets may
    ///    enclose anything (typically an IPv6 address), and only an
    ///    optional `:port` may follow the closing bracket.
    /// 2. No colon at all — the whole string is the host.
    /// 3. Exactly one colon — `host:port`; the port must be all digits.
    /// 4. Two or more colons, no brackets — the whole string is the host
    ///    (an unbracketed IPv6 literal; no port suffix is split off).
    ///
    /// No host validation beyond non-emptiness is performed: DNS-label
    /// legality and real IPv6 syntax are the resolver's concern.
    pub fn parse(spec: &str, default_port: Option<u16>) -> Result<Self> {
        if let Some(inner) = spec.strip_prefix('[') {
            return Self::parse_bracketed(spec, inner, default_port);
        }
        match spec.split_once(':') {
            // No colon: the whole specification is the host.
            None => Self::with_host(spec, spec, default_port),
            // More than one colon and no brackets: unbracketed IPv6
            // literal, treated as a bare host with no port.
            Some((_, rest)) if rest.contains(':') => {
                Self::with_host(spec, spec, default_port)
            }
            // Exactly one colon: host:port.
            Some((host, port)) => {
                let port = parse_port(spec, port)?;
                Self::with_host(spec, host, Some(port))
            }
        }
    }

    /// The host, without brackets. Never empty.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, either explicit from the specification or the caller's
    /// default. `None` means no port is known.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    fn parse_bracketed(spec: &str, inner: &str, default_port: Option<u16>) -> Result<Self> {
        let Some((host, after)) = inner.split_once(']') else {
            return Err(malformed(spec, MalformedAddressReason::UnmatchedBracket));
        };
        let port = if after.is_empty() {
            default_port
        } else if let Some(digits) = after.strip_prefix(':') {
            Some(parse_port(spec, digits)?)
        } else {
            return Err(malformed(spec, MalformedAddressReason::TrailingGarbage));
        };
        Self::with_host(spec, host, port)
    }

    fn with_host(spec: &str, host: &str, port: Option<u16>) -> Result<Self> {
        if host.is_empty() {
            return Err(malformed(spec, MalformedAddressReason::EmptyHost));
        }
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl FromStr for ServerAddr {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        Self::parse(spec, None)
    }
}

impl fmt::Display for ServerAddr {
    /// Format the address so that it parses back to the same value:
    /// a colon-containing host is re-bracketed before any `:port` suffix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            f.write_str(&self.host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// Parse an explicit port suffix: non-empty, all ASCII digits, within u16.
fn parse_port(spec: &str, digits: &str) -> Result<u16> {
    // u16::from_str would also accept a leading '+', which the address
    // syntax does not.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(spec, MalformedAddressReason::InvalidPort));
    }
    digits
        .parse()
        .map_err(|_| malformed(spec, MalformedAddressReason::InvalidPort))
}

fn malformed(spec: &str, reason: MalformedAddressReason) -> Error {
    Error::MalformedAddress {
        spec: spec.to_string(),
        reason,
    }
}
