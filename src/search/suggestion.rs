use serde::{Deserialize, Serialize};

/// A guard record returned by the search endpoint
///
/// Kept exactly as received; the list order is the backend's ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub state: String,
}

impl Suggestion {
    /// Route of the guard detail page
    pub fn detail_route(&self) -> String {
        format!("/guard/{}", self.id)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Second line of a rendered suggestion: "license • state"
    pub fn summary(&self) -> String {
        format!("{} • {}", self.license_number, self.state)
    }
}
