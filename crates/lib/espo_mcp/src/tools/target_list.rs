//! TargetList tool parameters.

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// TargetList attributes accepted by create and update, apart from the name.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TargetListFields {
    /// ID of TargetListCategory
    pub category_id: Option<String>,
    /// Description / notes
    pub description: Option<String>,
    /// Campaign ID
    pub source_campaign_id: Option<String>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// Team IDs
    pub teams_ids: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateTargetListRequest {
    /// Name of the TargetList (<=255 chars)
    pub name: String,
    #[serde(flatten)]
    pub fields: TargetListFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom fields starting with 'c'
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateTargetListRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateTargetListRequest {
    /// ID of the TargetList record to update
    pub target_list_id: String,
    /// Name of the TargetList (<=255 chars)
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: TargetListFields,
    /// Custom fields starting with 'c'
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateTargetListRequest {
    const EXCLUDE: &'static [&'static str] = &["target_list_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TargetListIdRequest {
    /// ID of the TargetList record
    pub target_list_id: String,
}
