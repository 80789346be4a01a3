use std::fmt;
use thiserror::Error;

/// One year, the max-age used when a request does not ask for anything else.
pub const DEFAULT_MAX_AGE: u64 = 31_536_000;

/// Directives whose argument must be delta-seconds (RFC 9111 §1.2.2).
const DELTA_SECONDS_DIRECTIVES: &[&str] = &[
    "max-age",
    "s-maxage",
    "max-stale",
    "min-fresh",
    "stale-while-revalidate",
    "stale-if-error",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheControlError {
    #[error("no directives given")]
    Empty,

    #[error("directive name {0:?} is not a valid token")]
    InvalidName(String),

    #[error("directive {directive} has a malformed argument {value:?}")]
    InvalidArgument { directive: String, value: String },

    #[error("directive {directive} expects a number of seconds, got {value:?}")]
    ExpectedSeconds { directive: String, value: String },
}

/// A validated `Cache-Control` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheControl(String);

impl CacheControl {
    pub fn public_max_age(seconds: u64) -> Self {
        Self(format!("public, max-age={seconds}"))
    }

    pub fn no_store() -> Self {
        Self("no-cache, no-store, must-revalidate".to_owned())
    }

    /// Validate a caller-supplied directive list.
    ///
    /// The list is comma separated; blank items are skipped but at least one
    /// directive must remain. The accepted value is kept verbatim (trimmed).
    pub fn parse(raw: &str) -> Result<Self, CacheControlError> {
        let mut directives = 0;

        for item in split_directives(raw) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            validate_directive(item)?;
            directives += 1;
        }

        if directives == 0 {
            return Err(CacheControlError::Empty);
        }

        Ok(Self(raw.trim().to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strictly parse delta-seconds: ASCII digits only, no sign, no whitespace.
pub(crate) fn parse_delta_seconds(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Split on commas that are not inside a quoted-string.
fn split_directives(raw: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, b) in raw.bytes().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' if in_quotes => escaped = true,
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                items.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&raw[start..]);

    items
}

fn validate_directive(item: &str) -> Result<(), CacheControlError> {
    let (name, argument) = match item.split_once('=') {
        Some((name, argument)) => (name.trim(), Some(argument.trim())),
        None => (item, None),
    };

    if !is_token(name) {
        return Err(CacheControlError::InvalidName(name.to_owned()));
    }

    let Some(argument) = argument else {
        return Ok(());
    };

    let name = name.to_ascii_lowercase();

    if DELTA_SECONDS_DIRECTIVES.contains(&name.as_str()) {
        let unquoted = argument
            .strip_prefix('"')
            .and_then(|a| a.strip_suffix('"'))
            .unwrap_or(argument);
        if parse_delta_seconds(unquoted).is_none() {
            return Err(CacheControlError::ExpectedSeconds {
                directive: name,
                value: argument.to_owned(),
            });
        }
        return Ok(());
    }

    if is_token(argument) || is_quoted_string(argument) {
        Ok(())
    } else {
        Err(CacheControlError::InvalidArgument {
            directive: name,
            value: argument.to_owned(),
        })
    }
}

/// RFC 9110 `token`: one or more `tchar`.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}

/// RFC 9110 `quoted-string` without obs-text.
fn is_quoted_string(s: &str) -> bool {
    let Some(inner) = s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return false;
    };

    let mut escaped = false;
    for b in inner.bytes() {
        if escaped {
            if b != b'\t' && !(0x20..0x7f).contains(&b) {
                return false;
            }
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == b'"' || (b != b'\t' && !(0x20..0x7f).contains(&b)) {
            return false;
        }
    }
    !escaped
}
