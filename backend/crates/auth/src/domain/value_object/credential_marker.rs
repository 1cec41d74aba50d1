use std::fmt;

/// Opaque credential carried by the client (the auth provider's cookie)
///
/// Presence is all that matters here. The value is never parsed or
/// verified; that belongs to the auth provider.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialMarker(String);

impl CredentialMarker {
    /// An empty cookie value counts as no marker at all.
    pub fn from_cookie(value: Option<&str>) -> Option<Self> {
        match value {
            Some(v) if !v.is_empty() => Some(Self(v.to_string())),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Redacted so tokens never end up in logs
impl fmt::Debug for CredentialMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialMarker(<redacted>)")
    }
}
