use serde::{Deserialize, Serialize};

/// Opaque handle issued by the identity provider for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    /// Provider-assigned user id
    pub uid: String,
    pub is_anonymous: bool,
}

impl SessionToken {
    pub fn anonymous(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            is_anonymous: true,
        }
    }
}
