//! Participant display labels

use serde::{Deserialize, Serialize};

/// Default assistant label when the caller supplies none
pub const DEFAULT_ASSISTANT_NAME: &str = "AI Assistant";

/// Default user label when the caller supplies none
pub const DEFAULT_USER_NAME: &str = "User";

/// The two free-text labels of a conversation
///
/// Both are optional. Normalization (title-casing, fallbacks) happens in the
/// export engine, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participants {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub assistant_name: Option<String>,
}

impl Participants {
    pub fn new(user_name: Option<String>, assistant_name: Option<String>) -> Self {
        Self {
            user_name,
            assistant_name,
        }
    }

    pub fn with_user(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn with_assistant(mut self, name: impl Into<String>) -> Self {
        self.assistant_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let p = Participants::default().with_user("ada").with_assistant("nova");
        assert_eq!(p, Participants::new(Some("ada".into()), Some("nova".into())));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let p: Participants =
            serde_json::from_str(r#"{"userName":"ada","assistantName":"Bot"}"#).unwrap();
        assert_eq!(p.user_name.as_deref(), Some("ada"));
        assert_eq!(p.assistant_name.as_deref(), Some("Bot"));
    }
}
