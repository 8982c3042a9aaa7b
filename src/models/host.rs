//! Host address model.

use regex::Regex;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Longest DNS name accepted, without a trailing dot.
pub const MAX_HOSTNAME_LENGTH: usize = 253;

static HOSTNAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_hostname_regex() -> &'static Regex {
    HOSTNAME_REGEX.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        )
        .expect("Invalid Regex")
    })
}

/// A single inventory host: an IP address or a DNS name.
///
/// Never contains whitespace, so it always renders as exactly one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostAddress {
    Ip(IpAddr),
    Hostname(String),
}

impl HostAddress {
    pub fn is_ip(&self) -> bool {
        matches!(self, HostAddress::Ip(_))
    }
}

impl FromStr for HostAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty host address".to_string());
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(HostAddress::Ip(ip));
        }

        let name = s.strip_suffix('.').unwrap_or(s);
        if name.len() > MAX_HOSTNAME_LENGTH || !get_hostname_regex().is_match(name) {
            return Err(format!("invalid host address '{s}'"));
        }
        // All numeric labels, e.g. "10.0.0.300", is a broken IPv4 address, not a name.
        if name
            .split('.')
            .all(|label| label.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(format!("invalid IP address '{s}'"));
        }
        Ok(HostAddress::Hostname(name.to_ascii_lowercase()))
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostAddress::Ip(ip) => write!(f, "{ip}"),
            HostAddress::Hostname(name) => write!(f, "{name}"),
        }
    }
}
