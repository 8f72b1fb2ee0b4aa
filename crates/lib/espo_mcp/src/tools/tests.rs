// @awa-component: MCP-CrudToolTests
//
//! Tests for tool parameter normalization and call building.

#[cfg(test)]
mod tests {
    use espo_core::{Entity, EspoParams};
    use http::Method;
    use serde_json::{Value, json};

    use crate::server::EspoMcpServer;
    use crate::tools::account::UpdateAccountRequest;
    use crate::tools::campaign::CreateCampaignRequest;
    use crate::tools::common::ListContactsRequest;
    use crate::tools::contact::UpdateContactRequest;
    use crate::tools::crud;
    use crate::tools::email::CreateEmailRequest;
    use crate::tools::lead::CreateLeadRequest;
    use crate::tools::target_list::UpdateTargetListRequest;

    fn schema_properties(tool_name: &str) -> serde_json::Map<String, Value> {
        let tool = EspoMcpServer::list_tools()
            .into_iter()
            .find(|t| t.name == tool_name)
            .unwrap_or_else(|| panic!("{tool_name} not registered"));
        tool.input_schema
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn server_exposes_thirty_seven_tools() {
        let tools = EspoMcpServer::list_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(tools.len(), 37, "Expected 37 tools, got: {names:?}");
        for name in ["create_lead", "list_contacts", "delete_target_list", "get_user", "list_users"] {
            assert!(names.contains(&name), "missing {name}");
        }
        assert!(!names.contains(&"delete_user"));
    }

    #[test]
    fn create_lead_sends_fields_as_body_and_duplicates_as_headers() {
        let req: CreateLeadRequest = serde_json::from_value(json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email_address_data": [{"emailAddress": "jane@example.com", "primary": true}],
            "duplicate_source_id": "src1",
            "skip_duplicate_check": false,
            "custom_fields": {"cRegion": "EU", "cScore": null}
        }))
        .unwrap();

        let call =
            crud::create(Entity::Lead, &req, &req.duplicate, req.custom_fields.as_ref()).unwrap();

        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "Lead");
        assert_eq!(
            Value::Object(call.params),
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "emailAddressData": [{"emailAddress": "jane@example.com", "primary": true}],
                "cRegion": "EU"
            })
        );
        assert_eq!(call.headers["X-Duplicate-Source-Id"], "src1");
        assert_eq!(call.headers["X-Skip-Duplicate-Check"], "false");
    }

    #[test]
    fn update_never_sends_the_record_id() {
        let req: UpdateContactRequest = serde_json::from_value(json!({
            "contact_id": "c42",
            "do_not_call": true
        }))
        .unwrap();

        let call =
            crud::update(Entity::Contact, &req.contact_id, &req, req.custom_fields.as_ref())
                .unwrap();

        assert_eq!(call.method, Method::PATCH);
        assert_eq!(call.path, "Contact/c42");
        assert_eq!(Value::Object(call.params), json!({"doNotCall": true}));
        assert!(call.headers.is_empty());
    }

    #[test]
    fn contact_update_sends_relationship_fields() {
        let req: UpdateContactRequest = serde_json::from_value(json!({
            "contact_id": "c42",
            "first_name": "Jane",
            "accounts_columns": {"a1": {"role": "CEO"}},
            "account_is_inactive": true,
            "target_lists_ids": ["t1"],
            "original_email_id": "e1"
        }))
        .unwrap();

        let call =
            crud::update(Entity::Contact, &req.contact_id, &req, req.custom_fields.as_ref())
                .unwrap();

        assert_eq!(
            Value::Object(call.params),
            json!({
                "firstName": "Jane",
                "accountsColumns": {"a1": {"role": "CEO"}},
                "accountIsInactive": true,
                "targetListsIds": ["t1"],
                "originalEmailId": "e1"
            })
        );
        let props = schema_properties("update_contact");
        assert!(props.contains_key("accounts_columns"));
        assert!(!schema_properties("create_contact").contains_key("accounts_columns"));
    }

    #[test]
    fn account_update_sends_version_number() {
        let req: UpdateAccountRequest = serde_json::from_value(json!({
            "account_id": "a1",
            "version_number": "3",
            "website": "https://acme.example"
        }))
        .unwrap();

        let call =
            crud::update(Entity::Account, &req.account_id, &req, req.custom_fields.as_ref())
                .unwrap();

        assert_eq!(call.path, "Account/a1");
        assert_eq!(
            Value::Object(call.params),
            json!({"versionNumber": "3", "website": "https://acme.example"})
        );
        assert!(!schema_properties("create_account").contains_key("version_number"));
    }

    #[test]
    fn target_list_rename_only_sends_the_name() {
        let req: UpdateTargetListRequest =
            serde_json::from_value(json!({"target_list_id": "t1", "name": "Q3 webinar"})).unwrap();
        let params = req.to_params().unwrap();
        assert_eq!(Value::Object(params), json!({"name": "Q3 webinar"}));
    }

    #[test]
    fn email_from_is_sent_as_from() {
        let req: CreateEmailRequest = serde_json::from_value(json!({
            "from": "sales@example.com",
            "to": "jane@example.com",
            "is_html": true
        }))
        .unwrap();
        let params = req.to_params().unwrap();
        assert_eq!(
            Value::Object(params),
            json!({"from": "sales@example.com", "to": "jane@example.com", "isHtml": true})
        );
        assert!(schema_properties("create_email").contains_key("from"));
    }

    #[test]
    fn campaign_create_requires_a_name() {
        assert!(serde_json::from_value::<CreateCampaignRequest>(json!({"status": "Active"})).is_err());

        let req: CreateCampaignRequest =
            serde_json::from_value(json!({"name": "Spring", "type": "Email", "budget": 1500.0}))
                .unwrap();
        let params = req.to_params().unwrap();
        assert_eq!(
            Value::Object(params),
            json!({"name": "Spring", "type": "Email", "budget": 1500.0})
        );
    }

    #[test]
    fn list_contacts_builds_a_query_call() {
        let req: ListContactsRequest = serde_json::from_value(json!({
            "where_group": [{"type": "equals", "attribute": "accountId", "value": "a1"}],
            "no_total": true
        }))
        .unwrap();

        let call = crud::list(Entity::Contact, &req, req.list.no_total).unwrap();

        assert_eq!(call.method, Method::GET);
        assert_eq!(call.path, "Contact");
        assert_eq!(
            Value::Object(call.params),
            json!({"whereGroup": [{"type": "equals", "attribute": "accountId", "value": "a1"}]})
        );
        assert_eq!(call.headers["X-No-Total"], "true");
    }

    #[test]
    fn list_contacts_pages_by_default() {
        let req: ListContactsRequest =
            serde_json::from_value(json!({"text_filter": "Jane*"})).unwrap();
        let call = crud::list(Entity::Contact, &req.with_paging_defaults(), None).unwrap();
        assert_eq!(
            Value::Object(call.params),
            json!({"maxSize": 100, "offset": 0, "textFilter": "Jane*"})
        );

        let req: ListContactsRequest =
            serde_json::from_value(json!({"max_size": 20, "offset": 40})).unwrap();
        let call = crud::list(Entity::Contact, &req.with_paging_defaults(), None).unwrap();
        assert_eq!(Value::Object(call.params), json!({"maxSize": 20, "offset": 40}));
    }

    #[test]
    fn create_schema_lists_header_and_custom_fields() {
        let props = schema_properties("create_lead");
        for key in ["first_name", "duplicate_source_id", "skip_duplicate_check", "custom_fields"] {
            assert!(props.contains_key(key), "create_lead schema missing {key}");
        }
        let props = schema_properties("list_users");
        assert!(props.contains_key("no_total"));
        assert!(props.contains_key("where_group"));
    }
}
