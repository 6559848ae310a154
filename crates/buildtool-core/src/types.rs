//! Domain types for build-tool classification.

use serde::{Deserialize, Serialize};

/// Gradle marker filename, checked at the project root only.
pub const GRADLE_BUILD_FILE: &str = "build.gradle";

/// Maven marker filename, checked at the project root only.
pub const MAVEN_BUILD_FILE: &str = "pom.xml";

/// Title shared by every project-open notification.
pub const NOTIFICATION_TITLE: &str = "Project Build Tool";

/// Classification of a project root by the marker files present in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildTool {
    Maven,
    Gradle,
    /// Both marker files are present; the project is ambiguous.
    MavenOrGradle,
    Unknown,
}

/// Icon the host renders next to the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Maven,
    Gradle,
    Unknown,
}

/// Static per-variant attributes, resolved through a plain data table.
struct ToolInfo {
    label: &'static str,
    icon: IconId,
    markers: &'static [&'static str],
}

const MAVEN_INFO: ToolInfo = ToolInfo {
    label: "This is Maven project",
    icon: IconId::Maven,
    markers: &[MAVEN_BUILD_FILE],
};

const GRADLE_INFO: ToolInfo = ToolInfo {
    label: "This is Gradle project",
    icon: IconId::Gradle,
    markers: &[GRADLE_BUILD_FILE],
};

// The ambiguous case lists Gradle first and borrows the unknown icon.
const MAVEN_OR_GRADLE_INFO: ToolInfo = ToolInfo {
    label: "This is Maven or Gradle project",
    icon: IconId::Unknown,
    markers: &[GRADLE_BUILD_FILE, MAVEN_BUILD_FILE],
};

const UNKNOWN_INFO: ToolInfo = ToolInfo {
    label: "This is unknown project",
    icon: IconId::Unknown,
    markers: &[],
};

impl BuildTool {
    const fn info(self) -> &'static ToolInfo {
        match self {
            Self::Maven => &MAVEN_INFO,
            Self::Gradle => &GRADLE_INFO,
            Self::MavenOrGradle => &MAVEN_OR_GRADLE_INFO,
            Self::Unknown => &UNKNOWN_INFO,
        }
    }

    /// Human-readable body text for the notification.
    pub const fn label(self) -> &'static str {
        self.info().label
    }

    /// Icon shown by the host next to the notification.
    pub const fn icon(self) -> IconId {
        self.info().icon
    }

    /// Marker filenames associated with this variant, in link order.
    pub const fn marker_files(self) -> &'static [&'static str] {
        self.info().markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(BuildTool::Maven.label(), "This is Maven project");
        assert_eq!(BuildTool::Gradle.label(), "This is Gradle project");
        assert_eq!(
            BuildTool::MavenOrGradle.label(),
            "This is Maven or Gradle project"
        );
        assert_eq!(BuildTool::Unknown.label(), "This is unknown project");
    }

    #[test]
    fn test_icons() {
        assert_eq!(BuildTool::Maven.icon(), IconId::Maven);
        assert_eq!(BuildTool::Gradle.icon(), IconId::Gradle);
        assert_eq!(BuildTool::MavenOrGradle.icon(), IconId::Unknown);
        assert_eq!(BuildTool::Unknown.icon(), IconId::Unknown);
    }

    #[test]
    fn test_marker_files() {
        assert_eq!(BuildTool::Maven.marker_files(), &[MAVEN_BUILD_FILE]);
        assert_eq!(BuildTool::Gradle.marker_files(), &[GRADLE_BUILD_FILE]);
        assert_eq!(
            BuildTool::MavenOrGradle.marker_files(),
            &[GRADLE_BUILD_FILE, MAVEN_BUILD_FILE]
        );
        assert!(BuildTool::Unknown.marker_files().is_empty());
    }

    #[test]
    fn test_icon_serialization() {
        assert_eq!(serde_json::to_string(&IconId::Maven).unwrap(), "\"maven\"");
        assert_eq!(
            serde_json::to_string(&IconId::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
