use serde::{Deserialize, Serialize};

/// A guest as listed for audience selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl Guest {
    /// "First Last", or the email address when the guest has no name.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();

        if first.is_empty() && last.is_empty() {
            return self.email.clone();
        }
        format!("{first} {last}").trim().to_string()
    }
}
