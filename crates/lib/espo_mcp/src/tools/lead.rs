//! Lead tool parameters.

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// Lead attributes accepted by create and update.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct LeadFields {
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
    /// Lead status (New, Assigned, In Process, Converted, Recycled, Dead)
    pub status: Option<String>,
    /// Lead source (Call, Email, Campaign, etc.)
    pub source: Option<String>,
    /// Industry (see allowed values)
    pub industry: Option<String>,
    /// Opportunity amount (>=0)
    pub opportunity_amount: Option<f64>,
    /// Currency code (USD, EUR)
    pub opportunity_amount_currency: Option<String>,
    /// Website (<=255 chars)
    pub website: Option<String>,
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
    /// Description / notes
    pub description: Option<String>,
    /// Account name (<=255 chars)
    pub account_name: Option<String>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// Team IDs
    pub teams_ids: Option<Vec<String>>,
    /// Campaign ID
    pub campaign_id: Option<String>,
    /// Target list ID
    pub target_list_id: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateLeadRequest {
    #[serde(flatten)]
    pub fields: LeadFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom EspoCRM fields (names start with `c`, e.g. cSomeCustomField)
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateLeadRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateLeadRequest {
    /// ID of the Lead record to update
    pub lead_id: String,
    #[serde(flatten)]
    pub fields: LeadFields,
    /// Custom EspoCRM fields (names start with `c`, e.g. cSomeCustomField)
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateLeadRequest {
    const EXCLUDE: &'static [&'static str] = &["lead_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LeadIdRequest {
    /// ID of the Lead record
    pub lead_id: String,
}
