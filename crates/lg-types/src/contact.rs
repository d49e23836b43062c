use serde::{Deserialize, Serialize};

/// Contact form submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// Phone number or other contact handle.
    pub contact: String,
    #[serde(rename = "messages")]
    pub message: String,
}
