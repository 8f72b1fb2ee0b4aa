// @zen-component: MCP-CrudCalls
//
//! Entity-agnostic CRUD call builders.
//!
//! Every tool reduces to exactly one [`EspoCall`]; the server executes it.

use std::collections::BTreeMap;

use espo_core::{Entity, EspoError, EspoParams};
use http::Method;
use serde_json::{Map, Value};

use super::common::{CustomFields, DuplicateOptions, no_total_headers};

/// One EspoCRM request, before credentials are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EspoCall {
    pub method: Method,
    pub path: String,
    pub params: Map<String, Value>,
    pub headers: BTreeMap<String, String>,
}

impl EspoCall {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            params: Map::new(),
            headers: BTreeMap::new(),
        }
    }
}

/// Merge custom fields into normalized params. Names are kept as given;
/// null values are dropped.
pub fn merge_custom_fields(params: &mut Map<String, Value>, custom: Option<&CustomFields>) {
    for (name, value) in custom.into_iter().flatten() {
        if !value.is_null() {
            params.insert(name.clone(), value.clone());
        }
    }
}

/// `POST <Entity>`
pub fn create<R: EspoParams>(
    entity: Entity,
    request: &R,
    duplicate: &DuplicateOptions,
    custom: Option<&CustomFields>,
) -> Result<EspoCall, EspoError> {
    let mut call = EspoCall::new(Method::POST, entity.as_str().to_string());
    call.params = request.to_params()?;
    merge_custom_fields(&mut call.params, custom);
    call.headers = duplicate.headers();
    Ok(call)
}

/// `GET <Entity>/<id>`
pub fn get(entity: Entity, id: &str) -> Result<EspoCall, EspoError> {
    Ok(EspoCall::new(Method::GET, entity.record_path(id)?))
}

/// `PATCH <Entity>/<id>`
pub fn update<R: EspoParams>(
    entity: Entity,
    id: &str,
    request: &R,
    custom: Option<&CustomFields>,
) -> Result<EspoCall, EspoError> {
    let mut call = EspoCall::new(Method::PATCH, entity.record_path(id)?);
    call.params = request.to_params()?;
    merge_custom_fields(&mut call.params, custom);
    Ok(call)
}

/// `DELETE <Entity>/<id>`
pub fn delete(entity: Entity, id: &str) -> Result<EspoCall, EspoError> {
    Ok(EspoCall::new(Method::DELETE, entity.record_path(id)?))
}

/// `GET <Entity>` with search parameters in the query string.
pub fn list<R: EspoParams>(
    entity: Entity,
    request: &R,
    no_total: Option<bool>,
) -> Result<EspoCall, EspoError> {
    let mut call = EspoCall::new(Method::GET, entity.as_str().to_string());
    call.params = request.to_params()?;
    call.headers = no_total_headers(no_total);
    Ok(call)
}
