//! Account tool parameters.

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// Account attributes accepted by create and update.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AccountFields {
    /// Account name (<=249 chars)
    pub name: Option<String>,
    /// Website (<=255 chars)
    pub website: Option<String>,
    /// Description / notes
    pub description: Option<String>,
    /// Primary email (<=255 chars)
    pub email_address: Option<String>,
    /// Multiple emails array of objects
    pub email_address_data: Option<Vec<Value>>,
    /// Email opted out
    pub email_address_is_opted_out: Option<bool>,
    /// Email invalid
    pub email_address_is_invalid: Option<bool>,
    /// Primary phone (<=36 chars)
    pub phone_number: Option<String>,
    /// Multiple phone numbers array of objects
    pub phone_number_data: Option<Vec<Value>>,
    /// Phone opted out
    pub phone_number_is_opted_out: Option<bool>,
    /// Phone invalid
    pub phone_number_is_invalid: Option<bool>,
    /// Account category (Customer, Investor, Partner, Reseller)
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// Industry (EspoCRM allowed values)
    pub industry: Option<String>,
    /// SIC Code (<=40 chars)
    pub sic_code: Option<String>,
    /// Billing street (<=255 chars)
    pub billing_address_street: Option<String>,
    /// Billing city (<=100 chars)
    pub billing_address_city: Option<String>,
    /// Billing state (<=100 chars)
    pub billing_address_state: Option<String>,
    /// Billing country (<=100 chars)
    pub billing_address_country: Option<String>,
    /// Billing postal code (<=40 chars)
    pub billing_address_postal_code: Option<String>,
    /// Shipping street (<=255 chars)
    pub shipping_address_street: Option<String>,
    /// Shipping city (<=100 chars)
    pub shipping_address_city: Option<String>,
    /// Shipping state (<=100 chars)
    pub shipping_address_state: Option<String>,
    /// Shipping country (<=100 chars)
    pub shipping_address_country: Option<String>,
    /// Shipping postal code (<=40 chars)
    pub shipping_address_postal_code: Option<String>,
    /// Campaign ID
    pub campaign_id: Option<String>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// Team IDs
    pub teams_ids: Option<Vec<String>>,
    /// Target List IDs
    pub target_lists_ids: Option<Vec<String>>,
    /// Target List ID
    pub target_list_id: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateAccountRequest {
    #[serde(flatten)]
    pub fields: AccountFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom EspoCRM fields (must start with `c`)
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateAccountRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateAccountRequest {
    /// ID of the Account record to update
    pub account_id: String,
    #[serde(flatten)]
    pub fields: AccountFields,
    /// Version number for optimistic locking
    pub version_number: Option<String>,
    /// Custom EspoCRM fields (must start with `c`)
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateAccountRequest {
    const EXCLUDE: &'static [&'static str] = &["account_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AccountIdRequest {
    /// ID of the Account record
    pub account_id: String,
}
