//! Errors for build-tool detection and link resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The project-open event carried no resolvable base path. Detection
    /// aborts rather than guessing at a root.
    #[error("project has no resolvable root path")]
    MissingProjectRoot,

    /// A hyperlink activation referenced an identifier the payload never
    /// advertised.
    #[error("unknown link identifier '{identifier}'")]
    UnknownLinkIdentifier { identifier: String },
}

pub type Result<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotifyError::UnknownLinkIdentifier {
            identifier: "settings.gradle".into(),
        };
        assert_eq!(err.to_string(), "unknown link identifier 'settings.gradle'");

        let err = NotifyError::MissingProjectRoot;
        assert!(err.to_string().contains("no resolvable root"));
    }
}
