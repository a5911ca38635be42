//! IP target validation.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::ArgumentError;

/// Four dot-separated octets 0-255 without leading zeros, then an optional
/// `:port` without leading zeros. The port range is checked after matching.
static TARGET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let octet = r"(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]\d|\d)";
    Regex::new(&format!(r"^({octet}(?:\.{octet}){{3}})(?::([1-9]\d{{0,4}}))?$"))
        .expect("target pattern is a valid regex")
});

/// A validated lookup target: an IPv4 address with an optional port.
///
/// The port is accepted and kept but not sent to the geolocation API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    raw: String,
    addr: Ipv4Addr,
    port: Option<u16>,
}

impl Target {
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The token exactly as given on the command line.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Target {
    type Err = ArgumentError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ArgumentError::InvalidTarget(token.to_string());

        let captures = TARGET_PATTERN.captures(token).ok_or_else(invalid)?;
        let addr: Ipv4Addr = captures[1].parse().map_err(|_| invalid())?;
        let port = match captures.get(2) {
            // u16 parsing rejects values above 65535; the pattern rules out 0
            Some(port) => Some(port.as_str().parse::<u16>().map_err(|_| invalid())?),
            None => None,
        };

        Ok(Target {
            raw: token.to_string(),
            addr,
            port,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
