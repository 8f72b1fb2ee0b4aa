//! Call tool parameters.
//!
//! The `*_columns` maps carry relationship columns keyed by record ID, e.g.
//! `{"<userId>": {"status": "Accepted"}}`; they are forwarded untouched.

use std::collections::BTreeMap;

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{CREATE_EXCLUDE, CustomFields, DuplicateOptions};

/// Call attributes accepted by create and update.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CallFields {
    /// A one-line string. <= 255 characters
    pub name: Option<String>,
    /// Call status (Planned, Held, Not Held).
    pub status: Option<String>,
    /// A timestamp in UTC. Format: YYYY-MM-DD HH:MM:SS
    pub date_start: Option<String>,
    /// A timestamp in UTC. Format: YYYY-MM-DD HH:MM:SS
    pub date_end: Option<String>,
    /// Direction: Outbound or Inbound
    pub direction: Option<String>,
    /// A multi-line text.
    pub description: Option<String>,
    /// A foreign record ID.
    pub parent_id: Option<String>,
    /// An entity type. Allowed: Account, Lead, Contact, Opportunity, Case, CCompany
    pub parent_type: Option<String>,
    /// A foreign record name.
    pub parent_name: Option<String>,
    /// Account record ID.
    pub account_id: Option<String>,
    /// Account name.
    pub account_name: Option<String>,
    /// A one-line string. <= 255 characters
    pub uid: Option<String>,
    /// Acceptance status (None, Accepted, Tentative, Declined)
    pub acceptance_status: Option<String>,
    /// IDs of User records.
    pub users_ids: Option<Vec<String>>,
    /// {ID => object} map for relationship columns
    pub users_columns: Option<Map<String, Value>>,
    /// {ID => name} map for users
    pub users_names: Option<BTreeMap<String, String>>,
    /// IDs of Contact records.
    pub contacts_ids: Option<Vec<String>>,
    /// {ID => object} map for relationship columns
    pub contacts_columns: Option<Map<String, Value>>,
    /// {ID => name} map for contacts
    pub contacts_names: Option<BTreeMap<String, String>>,
    /// IDs of Lead records.
    pub leads_ids: Option<Vec<String>>,
    /// {ID => object} map for relationship columns
    pub leads_columns: Option<Map<String, Value>>,
    /// {ID => name} map for leads
    pub leads_names: Option<BTreeMap<String, String>>,
    /// Assigned user ID
    pub assigned_user_id: Option<String>,
    /// Team IDs
    pub teams_ids: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateCallRequest {
    #[serde(flatten)]
    pub fields: CallFields,
    #[serde(flatten)]
    pub duplicate: DuplicateOptions,
    /// Custom EspoCRM fields (prefix with `c` e.g. cSomeCustomField).
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for CreateCallRequest {
    const EXCLUDE: &'static [&'static str] = CREATE_EXCLUDE;
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UpdateCallRequest {
    /// ID of the Call record to update
    pub call_id: String,
    #[serde(flatten)]
    pub fields: CallFields,
    /// Custom EspoCRM fields (prefix with `c` e.g. cSomeCustomField).
    pub custom_fields: Option<CustomFields>,
}

impl EspoParams for UpdateCallRequest {
    const EXCLUDE: &'static [&'static str] = &["call_id", "custom_fields"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CallIdRequest {
    /// ID of the Call record
    pub call_id: String,
}
