//! Runtime configuration supplied by the host.

use serde::{Deserialize, Serialize};

/// Notifier behavior toggles.
///
/// Hosts typically deserialize this from their own settings store; the
/// defaults reproduce the stock behavior of notifying for every project,
/// including ones with no recognized build tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifierConfig {
    /// Skip the notification entirely when no marker file is found.
    pub suppress_unknown: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            suppress_unknown: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_notifies_unknown() {
        assert!(!NotifierConfig::default().suppress_unknown);
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let config: NotifierConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.suppress_unknown);

        let config: NotifierConfig =
            serde_json::from_str(r#"{"suppressUnknown": true}"#).unwrap();
        assert!(config.suppress_unknown);
    }
}
