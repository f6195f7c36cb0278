//! Addressable views and URL path mapping.

use crate::error::{CoreError, CoreResult};

/// The two addressable views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The country directory, at the root path.
    #[default]
    Countries,
    /// The detail page for one country code.
    Country {
        /// ISO 3166-1 alpha-3 code from the path segment.
        code: String,
    },
}

impl Route {
    /// Parse a URL path strictly.
    ///
    /// Anything that is not the root or a well-formed `country/{code}` path
    /// (a `country/` segment with a missing, empty, or undecodable code,
    /// extra segments, an unknown prefix) is [`CoreError::InvalidRoute`].
    pub fn parse_strict(path: &str) -> CoreResult<Self> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, ..) => Ok(Self::Countries),
            (Some("country"), Some(code), None) => match urlencoding::decode(code) {
                Ok(code) if !code.is_empty() => Ok(Self::Country {
                    code: code.into_owned(),
                }),
                _ => Err(CoreError::InvalidRoute(path.to_string())),
            },
            _ => Err(CoreError::InvalidRoute(path.to_string())),
        }
    }

    /// Parse a URL path with redirect semantics.
    ///
    /// Anything [`parse_strict`](Self::parse_strict) rejects lands on the
    /// directory, the redirect target for unroutable paths.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::parse_strict(path).unwrap_or_else(|e| {
            log::debug!("Redirecting to the directory: {e}");
            Self::Countries
        })
    }

    /// Render back to a URL path, percent-encoding the code segment.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Countries => "/".to_string(),
            Self::Country { code } => format!("/country/{}", urlencoding::encode(code)),
        }
    }

    /// Whether this is a detail view (renders a back control).
    #[must_use]
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Self::Country { .. })
    }
}
