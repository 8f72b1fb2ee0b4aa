// @zen-component: MCP-ToolCommon
//
//! Parameter pieces shared by several entities' tools.

use std::collections::BTreeMap;

use espo_core::EspoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DUPLICATE_SOURCE_HEADER: &str = "X-Duplicate-Source-Id";
pub const SKIP_DUPLICATE_CHECK_HEADER: &str = "X-Skip-Duplicate-Check";
pub const NO_TOTAL_HEADER: &str = "X-No-Total";

/// Fields of a create request that travel as headers or are merged verbatim.
pub const CREATE_EXCLUDE: &[&str] = &["duplicate_source_id", "skip_duplicate_check", "custom_fields"];

/// Custom EspoCRM attributes, sent under their own names.
pub type CustomFields = Map<String, Value>;

fn bool_header(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Duplicate handling for create tools. Both values are sent as headers.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DuplicateOptions {
    /// Record ID of an entity being duplicated. Sent as header 'X-Duplicate-Source-Id'.
    pub duplicate_source_id: Option<String>,
    /// Skip duplicate check. Sent as header 'X-Skip-Duplicate-Check' with value 'true' or 'false'.
    pub skip_duplicate_check: Option<bool>,
}

impl DuplicateOptions {
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if let Some(id) = self.duplicate_source_id.as_deref().filter(|id| !id.is_empty()) {
            headers.insert(DUPLICATE_SOURCE_HEADER.to_string(), id.to_string());
        }
        if let Some(skip) = self.skip_duplicate_check {
            headers.insert(SKIP_DUPLICATE_CHECK_HEADER.to_string(), bool_header(skip));
        }
        headers
    }
}

/// Headers for a list call.
pub fn no_total_headers(no_total: Option<bool>) -> BTreeMap<String, String> {
    no_total
        .map(|v| BTreeMap::from([(NO_TOTAL_HEADER.to_string(), bool_header(v))]))
        .unwrap_or_default()
}

/// Search, sort and paging parameters accepted by every list tool.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ListRequest {
    /// List of attributes to return. Use to limit fields and improve performance.
    pub attribute_select: Option<Vec<String>>,
    /// Boolean filter flags (e.g. ['onlyMy']).
    pub bool_filter_list: Option<Vec<String>>,
    /// Maximum number of records to return (0-200).
    pub max_size: Option<u32>,
    /// Pagination offset (>= 0).
    pub offset: Option<u32>,
    /// Sort direction: 'asc' or 'desc'.
    pub order: Option<String>,
    /// Attribute/field to order by.
    pub order_by: Option<String>,
    /// Primary filter, e.g. 'active' (allowed values depend on the entity).
    pub primary_filter: Option<String>,
    /// Text filter query. Wildcard (*) is supported.
    pub text_filter: Option<String>,
    /// Advanced where group filters. Each item: {type, attribute, value}.
    pub where_group: Option<Vec<Value>>,
    /// Disable calculation of the total number of records. Sent as header 'X-No-Total'.
    pub no_total: Option<bool>,
}

impl EspoParams for ListRequest {
    const EXCLUDE: &'static [&'static str] = &["no_total"];
}

/// Parameters for `list_contacts`, which accepts a few extra filters.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ListContactsRequest {
    #[serde(flatten)]
    pub list: ListRequest,
    /// Record type.
    pub type_filter: Option<String>,
    /// Set true for date-time fields.
    pub date_time: Option<bool>,
    /// Time zone for date-time fields.
    pub time_zone: Option<String>,
}

impl EspoParams for ListContactsRequest {
    const EXCLUDE: &'static [&'static str] = &["no_total"];
}

impl ListContactsRequest {
    pub const DEFAULT_MAX_SIZE: u32 = 100;

    /// Contact listings page 100 records from offset 0 unless told otherwise.
    pub fn with_paging_defaults(mut self) -> Self {
        self.list.max_size.get_or_insert(Self::DEFAULT_MAX_SIZE);
        self.list.offset.get_or_insert(0);
        self
    }
}
