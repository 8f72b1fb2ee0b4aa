//! Campaign tool parameters.

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// Campaign attributes accepted by create and update, apart from the name.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CampaignFields {
    /// Campaign status (Planning, Active, Inactive, Complete)
    pub status: Option<String>,
    /// Campaign type (Email, Newsletter, Informational Email, Web, Television, Radio, Mail)
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    /// Start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Multi-line description
    pub description: Option<String>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// Team IDs
    pub teams_ids: Option<Vec<String>>,
    /// Target List IDs
    pub target_lists_ids: Option<Vec<String>>,
    /// Excluded Target List IDs
    pub excluding_target_lists_ids: Option<Vec<String>>,
    /// Budget amount
    pub budget: Option<f64>,
    /// Currency code (USD, EUR)
    pub budget_currency: Option<String>,
    /// Template ID for contacts
    pub contacts_template_id: Option<String>,
    /// Template ID for leads
    pub leads_template_id: Option<String>,
    /// Template ID for accounts
    pub accounts_template_id: Option<String>,
    /// Template ID for users
    pub users_template_id: Option<String>,
    /// Mail merge only with address flag
    pub mail_merge_only_with_address: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateCampaignRequest {
    /// Campaign name (<= 255 chars)
    pub name: String,
    #[serde(flatten)]
    pub fields: CampaignFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom EspoCRM fields (must start with 'c', e.g., cSomeCustomField)
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateCampaignRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateCampaignRequest {
    /// ID of the Campaign record to update
    pub campaign_id: String,
    /// Campaign name (<= 255 chars)
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: CampaignFields,
    /// Custom EspoCRM fields (must start with 'c', e.g., cSomeCustomField)
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateCampaignRequest {
    const EXCLUDE: &'static [&'static str] = &["campaign_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CampaignIdRequest {
    /// ID of the Campaign record
    pub campaign_id: String,
}
