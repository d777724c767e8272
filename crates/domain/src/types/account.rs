//! Social account connection payload

use serde::{Deserialize, Serialize};

/// Exchange an OAuth authorization code for a connected account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectAccountRequest {
    pub platform: String,
    pub auth_code: String,
}
