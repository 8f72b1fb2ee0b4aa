//! EspoCRM entity types exposed through the gateway.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::EspoError;

/// Everything but RFC 3986 unreserved characters is escaped in a record id.
const RECORD_ID: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A CRM record type, named the way the EspoCRM REST API names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Lead,
    Contact,
    Account,
    Campaign,
    Call,
    Email,
    TargetList,
    User,
}

impl Entity {
    pub const ALL: [Entity; 8] = [
        Entity::Lead,
        Entity::Contact,
        Entity::Account,
        Entity::Campaign,
        Entity::Call,
        Entity::Email,
        Entity::TargetList,
        Entity::User,
    ];

    /// Collection path segment, e.g. `TargetList`.
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Lead => "Lead",
            Entity::Contact => "Contact",
            Entity::Account => "Account",
            Entity::Campaign => "Campaign",
            Entity::Call => "Call",
            Entity::Email => "Email",
            Entity::TargetList => "TargetList",
            Entity::User => "User",
        }
    }

    /// Catalog category for the entity's tools.
    pub fn tag(self) -> &'static str {
        match self {
            Entity::Lead => "Leads",
            Entity::Contact => "Contacts",
            Entity::Account => "Accounts",
            Entity::Campaign => "Campaigns",
            Entity::Call => "Calls",
            Entity::Email => "Emails",
            Entity::TargetList => "TargetLists",
            Entity::User => "Users",
        }
    }

    /// Path of a single record, e.g. `Lead/abc123`.
    ///
    /// The id always stays one path segment under the entity: reserved
    /// characters are percent-encoded, and ids that would resolve as dot
    /// segments are refused.
    pub fn record_path(self, id: &str) -> Result<String, EspoError> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(EspoError::InvalidRecordId(id.to_string()));
        }
        Ok(format!(
            "{}/{}",
            self.as_str(),
            utf8_percent_encode(id, RECORD_ID)
        ))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
