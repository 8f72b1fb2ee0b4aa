//! Email tool parameters.

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// Email attributes accepted by create and update.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct EmailFields {
    /// Email name (<=255 chars)
    pub name: Option<String>,
    /// Email subject (<=255 chars)
    pub subject: Option<String>,
    /// From string (<=255 chars)
    pub from_string: Option<String>,
    /// Reply-To string (<=255 chars)
    pub reply_to_string: Option<String>,
    /// From address (<=255 chars)
    pub from: Option<String>,
    /// To address (<=255 chars)
    pub to: Option<String>,
    /// CC addresses (<=255 chars)
    pub cc: Option<String>,
    /// BCC addresses (<=255 chars)
    pub bcc: Option<String>,
    /// Reply-To address (<=255 chars)
    pub reply_to: Option<String>,
    /// Person string data (<=255 chars)
    pub person_string_data: Option<String>,
    /// Primary email address (<=255 chars)
    pub email_address: Option<String>,
    /// Email body text
    pub body: Option<String>,
    /// Set true if body is HTML
    pub is_html: Option<bool>,
    /// Email status (Draft, Sending, Sent, Archived, Failed)
    pub status: Option<String>,
    /// Parent record ID
    pub parent_id: Option<String>,
    /// Parent type (Account, Lead, Contact, Opportunity, Case, CCompany)
    pub parent_type: Option<String>,
    /// Date sent (UTC, YYYY-MM-DD HH:MM:SS)
    pub date_sent: Option<String>,
    /// Scheduled send date (UTC, YYYY-MM-DD HH:MM:SS)
    pub send_at: Option<String>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// ID of the email this is replying to
    pub replied_id: Option<String>,
    /// List of Team IDs
    pub teams_ids: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateEmailRequest {
    #[serde(flatten)]
    pub fields: EmailFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom EspoCRM fields starting with `c`
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateEmailRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateEmailRequest {
    /// ID of the Email record to update
    pub email_id: String,
    #[serde(flatten)]
    pub fields: EmailFields,
    /// Custom EspoCRM fields starting with `c`
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateEmailRequest {
    const EXCLUDE: &'static [&'static str] = &["email_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EmailIdRequest {
    /// ID of the Email record
    pub email_id: String,
}
