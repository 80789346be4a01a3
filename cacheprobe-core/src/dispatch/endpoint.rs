use std::str::FromStr;

/// Routes served by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Index,
    Status,
    CacheTest,
    NoCache,
    /// Raw, not yet validated `:seconds` path segment.
    MaxAge(String),
}

impl FromStr for Endpoint {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A single trailing slash is tolerated, except on the root itself.
        let path = match s.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => s,
        };

        match path {
            "/" => Ok(Endpoint::Index),
            "/status" => Ok(Endpoint::Status),
            "/cache-test" => Ok(Endpoint::CacheTest),
            "/cache-test/no-cache" => Ok(Endpoint::NoCache),
            _ => match path.strip_prefix("/cache-test/max-age/") {
                Some(seconds) if !seconds.is_empty() && !seconds.contains('/') => {
                    Ok(Endpoint::MaxAge(seconds.to_owned()))
                }
                _ => Err("unknown endpoint"),
            },
        }
    }
}

impl Endpoint {
    /// Short label used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Index => "index",
            Endpoint::Status => "status",
            Endpoint::CacheTest => "cache-test",
            Endpoint::NoCache => "no-cache",
            Endpoint::MaxAge(_) => "max-age",
        }
    }
}
