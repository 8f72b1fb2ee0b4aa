//! Contact tool parameters.

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// Contact attributes accepted by create and update.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ContactFields {
    /// Salutation (Mr., Ms., Dr., etc.)
    pub salutation_name: Option<String>,
    /// First name (<=100 chars)
    pub first_name: Option<String>,
    /// Middle name (<=100 chars)
    pub middle_name: Option<String>,
    /// Last name (<=100 chars)
    pub last_name: Option<String>,
    /// Title (<=100 chars)
    pub title: Option<String>,
    /// Description / notes
    pub description: Option<String>,
    /// Primary email (<=255 chars)
    pub email_address: Option<String>,
    /// Multiple emails array of objects
    pub email_address_data: Option<Vec<Value>>,
    /// Primary phone number (<=36 chars)
    pub phone_number: Option<String>,
    /// Multiple phone numbers array of objects
    pub phone_number_data: Option<Vec<Value>>,
    /// Do not call flag
    pub do_not_call: Option<bool>,
    /// Street (<=255 chars)
    pub address_street: Option<String>,
    /// City (<=100 chars)
    pub address_city: Option<String>,
    /// State (<=100 chars)
    pub address_state: Option<String>,
    /// Country (<=100 chars)
    pub address_country: Option<String>,
    /// Postal code (<=40 chars)
    pub address_postal_code: Option<String>,
    /// ID of related Account
    pub account_id: Option<String>,
    /// IDs of related Accounts
    pub accounts_ids: Option<Vec<String>>,
    /// Account role
    pub account_role: Option<String>,
    /// Opportunity role
    pub opportunity_role: Option<String>,
    /// Campaign ID
    pub campaign_id: Option<String>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// Team IDs
    pub teams_ids: Option<Vec<String>>,
    /// Target list ID
    pub target_list_id: Option<String>,
    /// Email opted out flag
    pub email_address_is_opted_out: Option<bool>,
    /// Email invalid flag
    pub email_address_is_invalid: Option<bool>,
    /// Phone opted out flag
    pub phone_number_is_opted_out: Option<bool>,
    /// Phone invalid flag
    pub phone_number_is_invalid: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateContactRequest {
    #[serde(flatten)]
    pub fields: ContactFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom EspoCRM fields, must start with `c` prefix
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateContactRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateContactRequest {
    /// ID of the Contact record to update
    pub contact_id: String,
    #[serde(flatten)]
    pub fields: ContactFields,
    /// AccountID => column values mapping for relationships
    pub accounts_columns: Option<Map<String, Value>>,
    /// Account inactive flag
    pub account_is_inactive: Option<bool>,
    /// Multiple Target List IDs
    pub target_lists_ids: Option<Vec<String>>,
    /// Original Email ID
    pub original_email_id: Option<String>,
    /// Custom EspoCRM fields, must start with `c` prefix
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateContactRequest {
    const EXCLUDE: &'static [&'static str] = &["contact_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContactIdRequest {
    /// ID of the Contact record
    pub contact_id: String,
}
