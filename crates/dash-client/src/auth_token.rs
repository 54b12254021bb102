const BEARER_PREFIX: &str = "Bearer ";
const PREVIEW_LEN: usize = 20;

/// Bearer credential, held exactly as it is sent in the `Authorization` header.
///
/// Tokens are stored already prefixed with `Bearer `; the header value is the
/// stored string verbatim, never prefixed twice.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token issued by the login endpoint.
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with(BEARER_PREFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{BEARER_PREFIX}{raw}"))
        }
    }

    /// Wrap a value read back from persistence, unchanged.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_header_value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Safe-to-log prefix of the token.
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(PREVIEW_LEN).collect();
        format!("{head}...")
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthToken").field(&self.preview()).finish()
    }
}
