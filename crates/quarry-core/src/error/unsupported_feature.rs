use super::Error;

/// Error when a dialect has no rendering rule for a statement or clause.
///
/// This occurs when:
/// - A statement kind is not implemented by the dialect (`TRUNCATE` on SQLite)
/// - A clause would change the statement's meaning if dropped (`LIMIT` on an
///   SQLite `UPDATE`)
/// - A connection URL names a database no bundled driver can open
///
/// Deliberately omitted modifiers (charsets, table options, foreign keys on
/// SQLite) never produce this error.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedFeature(_)))
    }
}
