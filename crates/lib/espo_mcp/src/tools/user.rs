//! User tool parameters. Users are read-only through the gateway.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserIdRequest {
    /// ID of the User record to retrieve
    pub user_id: String,
}
