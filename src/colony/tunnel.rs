use crate::error::LemInError;
use std::fmt;
use std::str::FromStr;

/// Undirected link between two rooms, as declared by an `a-b` line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tunnel {
    pub a: String,
    pub b: String,
}

impl Tunnel {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl FromStr for Tunnel {
    type Err = LemInError;

    /// Parses `a-b`. The line number is filled in by the caller.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Ok(Tunnel::new(a, b)),
            _ => Err(LemInError::invalid(0, format!("bad tunnel `{s}`"))),
        }
    }
}

impl fmt::Display for Tunnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tunnel() {
        let tunnel: Tunnel = "start-A".parse().unwrap();

        assert_eq!(tunnel, Tunnel::new("start", "A"));
        assert_eq!(tunnel.to_string(), "start-A");
    }

    #[test]
    fn test_reject_malformed_tunnels() {
        for bad in ["a-b-c", "-b", "a-", "-"] {
            assert!(bad.parse::<Tunnel>().is_err(), "{bad} should be rejected");
        }
    }
}
