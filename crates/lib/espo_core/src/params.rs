// @zen-component: ESPO-ParameterNormalizer
//
//! Parameter normalization for the EspoCRM REST API.
//!
//! Tool arguments arrive as snake_case names; EspoCRM attributes are
//! camelCase. Unset arguments are dropped rather than sent as `null` so an
//! update never clears a field the caller did not mention.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EspoError;

/// Argument names that are never forwarded, whatever the caller excludes.
pub const RESERVED_NAMES: &[&str] = &["self", "kwargs"];

/// Convert a snake_case name to camelCase.
///
/// The first segment is kept as given; every following segment has its
/// first letter uppercased and the rest lowercased. Empty segments vanish,
/// so a trailing underscore (`from_`) maps to the bare word (`from`).
pub fn snake_to_camel(name: &str) -> String {
    let mut parts = name.split('_');
    let mut out = String::with_capacity(name.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Build the EspoCRM parameter map from `(name, value)` pairs.
///
/// Entries whose name is excluded or reserved, or whose value is `null`, are
/// skipped. Remaining names are converted with [`snake_to_camel`]; values are
/// passed through untouched, nested structures included.
pub fn build_params<I, K>(args: I, exclude: &[&str]) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let mut params = Map::new();
    for (key, value) in args {
        let key = key.as_ref();
        if value.is_null() || exclude.contains(&key) || RESERVED_NAMES.contains(&key) {
            continue;
        }
        params.insert(snake_to_camel(key), value);
    }
    params
}

/// A typed tool parameter struct that can be normalized into EspoCRM params.
///
/// The struct is serialized with serde (field names stay snake_case) and fed
/// through [`build_params`]. Fields that travel as headers rather than body
/// or query parameters are listed in [`EXCLUDE`](Self::EXCLUDE).
pub trait EspoParams: Serialize {
    /// Serialized field names that must never reach the body or query.
    const EXCLUDE: &'static [&'static str] = &[];

    fn to_params(&self) -> Result<Map<String, Value>, EspoError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(build_params(map, Self::EXCLUDE)),
            Value::Null => Ok(Map::new()),
            Value::Bool(_) => Err(EspoError::NotAnObject("a boolean")),
            Value::Number(_) => Err(EspoError::NotAnObject("a number")),
            Value::String(_) => Err(EspoError::NotAnObject("a string")),
            Value::Array(_) => Err(EspoError::NotAnObject("an array")),
        }
    }
}

impl EspoParams for Map<String, Value> {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn snake_to_camel_renames_segments() {
        assert_eq!(snake_to_camel("first_name"), "firstName");
        assert_eq!(snake_to_camel("email_address_data"), "emailAddressData");
        assert_eq!(snake_to_camel("billing_address_postal_code"), "billingAddressPostalCode");
    }

    #[test]
    fn snake_to_camel_keeps_single_words() {
        assert_eq!(snake_to_camel("name"), "name");
        assert_eq!(snake_to_camel("cCustomField"), "cCustomField");
        assert_eq!(snake_to_camel(""), "");
    }

    #[test]
    fn snake_to_camel_lowercases_segment_tails() {
        assert_eq!(snake_to_camel("teams_IDS"), "teamsIds");
        assert_eq!(snake_to_camel("from_"), "from");
        assert_eq!(snake_to_camel("a__b"), "aB");
    }

    #[test]
    fn build_params_drops_nulls_excluded_and_reserved() {
        let args = object(json!({
            "first_name": "Jane",
            "last_name": null,
            "lead_id": "abc123",
            "self": "ignored",
            "kwargs": {"x": 1},
            "do_not_call": false,
        }));

        let params = build_params(args, &["lead_id"]);

        assert_eq!(params.len(), 2);
        assert_eq!(params["firstName"], "Jane");
        assert_eq!(params["doNotCall"], false);
        assert!(!params.contains_key("lastName"));
        assert!(!params.contains_key("leadId"));
        assert!(!params.contains_key("self"));
    }

    #[test]
    fn build_params_passes_nested_values_through() {
        let args = object(json!({
            "email_address_data": [{"emailAddress": "a@b.c", "primary": true}],
            "users_columns": {"u1": {"status": "Accepted"}},
        }));

        let params = build_params(args, &[]);

        assert_eq!(
            params["emailAddressData"],
            json!([{"emailAddress": "a@b.c", "primary": true}])
        );
        assert_eq!(params["usersColumns"], json!({"u1": {"status": "Accepted"}}));
    }

    #[test]
    fn build_params_is_deterministic() {
        let a = build_params(
            object(json!({"max_size": 20, "order_by": "createdAt"})),
            &[],
        );
        let b = build_params(
            vec![
                ("order_by", json!("createdAt")),
                ("max_size", json!(20)),
            ],
            &[],
        );
        assert_eq!(a, b);
    }

    #[derive(Serialize)]
    struct Sample {
        first_name: Option<String>,
        skip_duplicate_check: Option<bool>,
        teams_ids: Option<Vec<String>>,
    }

    impl EspoParams for Sample {
        const EXCLUDE: &'static [&'static str] = &["skip_duplicate_check"];
    }

    #[test]
    fn typed_params_honour_exclusions() {
        let sample = Sample {
            first_name: Some("Jane".into()),
            skip_duplicate_check: Some(false),
            teams_ids: None,
        };

        let params = sample.to_params().expect("params");

        assert_eq!(Value::Object(params), json!({"firstName": "Jane"}));
    }

    #[test]
    fn typed_params_reject_non_objects() {
        #[derive(Serialize)]
        struct Wrapped(u32);
        impl EspoParams for Wrapped {}

        let err = Wrapped(3).to_params().unwrap_err();
        assert!(matches!(err, EspoError::NotAnObject("a number")));
    }
}
