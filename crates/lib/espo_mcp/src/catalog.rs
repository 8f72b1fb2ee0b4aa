// @zen-component: MCP-ToolCatalog
//
//! Tool catalog: display metadata for every registered tool.
//!
//! Names, titles and tags come from the registration table below; the
//! description and input schema come from the tool router.

use espo_core::Entity;
use serde::Serialize;
use serde_json::Value;

use crate::server::EspoMcpServer;

/// CRUD operation a tool performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
    List,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Get,
        Operation::Update,
        Operation::Delete,
        Operation::List,
    ];

    fn verb(self) -> &'static str {
        match self {
            Operation::Create => "Create",
            Operation::Get => "Read",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
            Operation::List => "List",
        }
    }
}

/// Registration table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: String,
    pub title: String,
    pub entity: Entity,
    pub operation: Operation,
}

/// A catalog entry as published on the info page.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub title: String,
    pub tag: &'static str,
    pub description: String,
    pub input_schema: Value,
}

/// snake_case stem of an entity name: `TargetList` -> `target_list`.
fn snake_name(entity: Entity) -> String {
    let mut out = String::new();
    for (i, c) in entity.as_str().chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Operations exposed for an entity. Users are read-only.
pub fn operations(entity: Entity) -> &'static [Operation] {
    match entity {
        Entity::User => &[Operation::Get, Operation::List],
        _ => &Operation::ALL,
    }
}

/// Every tool the server registers, in catalog order.
pub fn tool_specs() -> Vec<ToolSpec> {
    let mut specs = Vec::new();
    for entity in Entity::ALL {
        let stem = snake_name(entity);
        for &operation in operations(entity) {
            let (name, title) = match operation {
                Operation::List => (
                    format!("list_{stem}s"),
                    format!("{} {}", operation.verb(), entity.tag()),
                ),
                _ => (
                    format!("{}_{stem}", operation_prefix(operation)),
                    format!("{} {}", operation.verb(), entity.as_str()),
                ),
            };
            specs.push(ToolSpec {
                name,
                title,
                entity,
                operation,
            });
        }
    }
    specs
}

fn operation_prefix(operation: Operation) -> &'static str {
    match operation {
        Operation::Create => "create",
        Operation::Get => "get",
        Operation::Update => "update",
        Operation::Delete => "delete",
        Operation::List => "list",
    }
}

/// Join the registration table with the router's tool definitions.
///
/// Specs without a registered tool are skipped; the tests keep that set empty.
pub fn tool_catalog() -> Vec<CatalogEntry> {
    let tools = EspoMcpServer::list_tools();
    tool_specs()
        .into_iter()
        .filter_map(|spec| {
            let tool = tools.iter().find(|t| t.name == spec.name)?;
            Some(CatalogEntry {
                tag: spec.entity.tag(),
                description: tool.description.as_deref().unwrap_or_default().to_string(),
                input_schema: Value::Object((*tool.input_schema).clone()),
                name: spec.name,
                title: spec.title,
            })
        })
        .collect()
}
