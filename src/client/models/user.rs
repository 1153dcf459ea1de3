//! Social login user profile

use serde::{Deserialize, Serialize};

/// Profile handed over by a social identity provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub username: String,

    pub email: String,

    #[serde(default)]
    pub firstname: String,

    #[serde(default)]
    pub lastname: String,

    /// Id of the account at the identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_social: Option<String>,
}
