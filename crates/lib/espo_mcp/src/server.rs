// @zen-component: MCP-Server
//
//! MCP server handler: the EspoCRM CRUD tools.
//!
//! Every tool follows the same path: read the credentials the auth
//! middleware attached, build one [`EspoCall`], run it through the hook
//! pipeline and the gateway client, and return the envelope as JSON.

use std::sync::Arc;
use std::time::Duration;

use espo_core::{CallOptions, Entity, EspoError, ResponseEnvelope};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Extension, wrapper::Parameters},
    model::{
        CallToolResult, Content, ErrorCode, ErrorData, ServerCapabilities, ServerInfo, Tool,
    },
    tool, tool_handler, tool_router,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::auth::extract_auth;
use crate::hooks::{HookContext, HookPipeline};
use crate::tools::account::{AccountIdRequest, CreateAccountRequest, UpdateAccountRequest};
use crate::tools::call::{CallIdRequest, CreateCallRequest, UpdateCallRequest};
use crate::tools::campaign::{CampaignIdRequest, CreateCampaignRequest, UpdateCampaignRequest};
use crate::tools::common::{ListContactsRequest, ListRequest};
use crate::tools::contact::{ContactIdRequest, CreateContactRequest, UpdateContactRequest};
use crate::tools::crud::{self, EspoCall};
use crate::tools::email::{CreateEmailRequest, EmailIdRequest, UpdateEmailRequest};
use crate::tools::lead::{CreateLeadRequest, LeadIdRequest, UpdateLeadRequest};
use crate::tools::target_list::{
    CreateTargetListRequest, TargetListIdRequest, UpdateTargetListRequest,
};
use crate::tools::user::UserIdRequest;

type ToolResult = Result<CallToolResult, ErrorData>;
type HttpParts = http::request::Parts;

/// EspoCRM MCP server handler.
///
/// Holds a shared HTTP client (one connection pool for every tenant), the
/// outbound timeout, the hook pipeline and the `ToolRouter`. A new instance
/// is created per MCP session by the `StreamableHttpService` factory.
#[derive(Clone)]
pub struct EspoMcpServer {
    http: reqwest::Client,
    request_timeout: Duration,
    hook_pipeline: Arc<HookPipeline>,
    tool_router: ToolRouter<Self>,
}

/// Helper to serialize a value to a pretty JSON CallToolResult.
fn json_result<T: serde::Serialize>(value: &T) -> ToolResult {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

impl EspoMcpServer {
    /// Run one tool call end to end.
    async fn execute(
        &self,
        parts: &HttpParts,
        tool_name: &str,
        entity: Entity,
        call: Result<EspoCall, EspoError>,
    ) -> ToolResult {
        let creds = match extract_auth(parts) {
            Ok(creds) => creds,
            Err(reason) => return json_result(&ResponseEnvelope::rejected(reason.to_string())),
        };
        let mut call = match call {
            Ok(call) => call,
            Err(e) => return json_result(&ResponseEnvelope::rejected(e.to_string())),
        };

        let ctx = HookContext::new(tool_name, entity, &creds.api_address);
        let mut params = Value::Object(std::mem::take(&mut call.params));
        self.hook_pipeline
            .run_before(&ctx, &mut params)
            .await
            .map_err(|e| ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None))?;
        let params = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let options = CallOptions::default()
            .headers(call.headers)
            .timeout(self.request_timeout);
        let api = creds.client(self.http.clone());
        let mut envelope = api
            .call(call.method, Some(&call.path), &params, &options)
            .await;

        if let Err(e) = self.hook_pipeline.run_after(&ctx, &mut envelope).await {
            warn!(call_id = %ctx.call_id, "after_call hook failed: {e}");
        }
        json_result(&envelope)
    }
}

#[tool_router]
impl EspoMcpServer {
    pub fn new(http: reqwest::Client, request_timeout: Duration, hook_pipeline: Arc<HookPipeline>) -> Self {
        Self {
            http,
            request_timeout,
            hook_pipeline,
            tool_router: Self::tool_router(),
        }
    }

    /// Return tool definitions registered in this server.
    pub fn list_tools() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    // Leads

    #[tool(description = "Create a new Lead in EspoCRM. Fields left unset are not sent.")]
    async fn create_lead(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateLeadRequest>,
    ) -> ToolResult {
        let call = crud::create(Entity::Lead, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_lead", Entity::Lead, call).await
    }

    #[tool(description = "Get a single Lead record by ID from EspoCRM.")]
    async fn get_lead(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<LeadIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::Lead, &req.lead_id);
        self.execute(&parts, "get_lead", Entity::Lead, call).await
    }

    #[tool(description = "Update an existing Lead in EspoCRM. Only the fields provided are changed.")]
    async fn update_lead(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateLeadRequest>,
    ) -> ToolResult {
        let call = crud::update(Entity::Lead, &req.lead_id, &req, req.custom_fields.as_ref());
        self.execute(&parts, "update_lead", Entity::Lead, call).await
    }

    #[tool(description = "Delete a Lead record by ID from EspoCRM.")]
    async fn delete_lead(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<LeadIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::Lead, &req.lead_id);
        self.execute(&parts, "delete_lead", Entity::Lead, call).await
    }

    #[tool(description = "List leads from EspoCRM with optional filtering, sorting, and pagination. Primary filters: actual, active, converted.")]
    async fn list_leads(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::Lead, &req, req.no_total);
        self.execute(&parts, "list_leads", Entity::Lead, call).await
    }

    // Contacts

    #[tool(description = "Create a new Contact in EspoCRM. Fields left unset are not sent.")]
    async fn create_contact(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateContactRequest>,
    ) -> ToolResult {
        let call = crud::create(Entity::Contact, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_contact", Entity::Contact, call).await
    }

    #[tool(description = "Get a single Contact record by ID from EspoCRM.")]
    async fn get_contact(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ContactIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::Contact, &req.contact_id);
        self.execute(&parts, "get_contact", Entity::Contact, call).await
    }

    #[tool(description = "Update an existing Contact in EspoCRM. Only the fields provided are changed.")]
    async fn update_contact(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateContactRequest>,
    ) -> ToolResult {
        let call = crud::update(Entity::Contact, &req.contact_id, &req, req.custom_fields.as_ref());
        self.execute(&parts, "update_contact", Entity::Contact, call).await
    }

    #[tool(description = "Delete a Contact record by ID from EspoCRM.")]
    async fn delete_contact(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ContactIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::Contact, &req.contact_id);
        self.execute(&parts, "delete_contact", Entity::Contact, call).await
    }

    #[tool(description = "List contacts from EspoCRM with optional filtering, sorting, and pagination (100 records from offset 0 by default). Primary filters: portalUsers, notPortalUsers, accountActive.")]
    async fn list_contacts(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListContactsRequest>,
    ) -> ToolResult {
        let req = req.with_paging_defaults();
        let call = crud::list(Entity::Contact, &req, req.list.no_total);
        self.execute(&parts, "list_contacts", Entity::Contact, call).await
    }

    // Accounts

    #[tool(description = "Create a new Account in EspoCRM. Fields left unset are not sent.")]
    async fn create_account(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateAccountRequest>,
    ) -> ToolResult {
        let call = crud::create(Entity::Account, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_account", Entity::Account, call).await
    }

    #[tool(description = "Get a single Account record by ID from EspoCRM.")]
    async fn get_account(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<AccountIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::Account, &req.account_id);
        self.execute(&parts, "get_account", Entity::Account, call).await
    }

    #[tool(description = "Update an existing Account in EspoCRM. Only the fields provided are changed.")]
    async fn update_account(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateAccountRequest>,
    ) -> ToolResult {
        let call = crud::update(Entity::Account, &req.account_id, &req, req.custom_fields.as_ref());
        self.execute(&parts, "update_account", Entity::Account, call).await
    }

    #[tool(description = "Delete an Account record by ID from EspoCRM.")]
    async fn delete_account(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<AccountIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::Account, &req.account_id);
        self.execute(&parts, "delete_account", Entity::Account, call).await
    }

    #[tool(description = "List accounts from EspoCRM with optional filtering, sorting, and pagination. Primary filters: customers, partners, resellers, recentlyCreated.")]
    async fn list_accounts(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::Account, &req, req.no_total);
        self.execute(&parts, "list_accounts", Entity::Account, call).await
    }

    // Campaigns

    #[tool(description = "Create a new Campaign in EspoCRM. Fields left unset are not sent.")]
    async fn create_campaign(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateCampaignRequest>,
    ) -> ToolResult {
        let call = crud::create(Entity::Campaign, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_campaign", Entity::Campaign, call).await
    }

    #[tool(description = "Get a single Campaign record by ID from EspoCRM.")]
    async fn get_campaign(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CampaignIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::Campaign, &req.campaign_id);
        self.execute(&parts, "get_campaign", Entity::Campaign, call).await
    }

    #[tool(description = "Update an existing Campaign in EspoCRM. Only the fields provided are changed.")]
    async fn update_campaign(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateCampaignRequest>,
    ) -> ToolResult {
        let call =
            crud::update(Entity::Campaign, &req.campaign_id, &req, req.custom_fields.as_ref());
        self.execute(&parts, "update_campaign", Entity::Campaign, call).await
    }

    #[tool(description = "Delete a Campaign record by ID from EspoCRM.")]
    async fn delete_campaign(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CampaignIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::Campaign, &req.campaign_id);
        self.execute(&parts, "delete_campaign", Entity::Campaign, call).await
    }

    #[tool(description = "List campaigns from EspoCRM with optional filtering, sorting, and pagination. Primary filters: active.")]
    async fn list_campaigns(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::Campaign, &req, req.no_total);
        self.execute(&parts, "list_campaigns", Entity::Campaign, call).await
    }

    // Calls

    #[tool(description = "Create a new Call in EspoCRM. Fields left unset are not sent.")]
    async fn create_call(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateCallRequest>,
    ) -> ToolResult {
        let call = crud::create(Entity::Call, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_call", Entity::Call, call).await
    }

    #[tool(description = "Get a single Call record by ID from EspoCRM.")]
    async fn get_call(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CallIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::Call, &req.call_id);
        self.execute(&parts, "get_call", Entity::Call, call).await
    }

    #[tool(description = "Update an existing Call in EspoCRM. Only the fields provided are changed.")]
    async fn update_call(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateCallRequest>,
    ) -> ToolResult {
        let call = crud::update(Entity::Call, &req.call_id, &req, req.custom_fields.as_ref());
        self.execute(&parts, "update_call", Entity::Call, call).await
    }

    #[tool(description = "Delete a Call record by ID from EspoCRM.")]
    async fn delete_call(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CallIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::Call, &req.call_id);
        self.execute(&parts, "delete_call", Entity::Call, call).await
    }

    #[tool(description = "List calls from EspoCRM with optional filtering, sorting, and pagination. Primary filters: planned, held, todays.")]
    async fn list_calls(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::Call, &req, req.no_total);
        self.execute(&parts, "list_calls", Entity::Call, call).await
    }

    // Emails

    #[tool(description = "Create a new Email in EspoCRM. Fields left unset are not sent.")]
    async fn create_email(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateEmailRequest>,
    ) -> ToolResult {
        let call = crud::create(Entity::Email, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_email", Entity::Email, call).await
    }

    #[tool(description = "Get a single Email record by ID from EspoCRM.")]
    async fn get_email(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<EmailIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::Email, &req.email_id);
        self.execute(&parts, "get_email", Entity::Email, call).await
    }

    #[tool(description = "Update an existing Email in EspoCRM. Only the fields provided are changed.")]
    async fn update_email(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateEmailRequest>,
    ) -> ToolResult {
        let call = crud::update(Entity::Email, &req.email_id, &req, req.custom_fields.as_ref());
        self.execute(&parts, "update_email", Entity::Email, call).await
    }

    #[tool(description = "Delete an Email record by ID from EspoCRM.")]
    async fn delete_email(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<EmailIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::Email, &req.email_id);
        self.execute(&parts, "delete_email", Entity::Email, call).await
    }

    #[tool(description = "List emails from EspoCRM with optional filtering, sorting, and pagination.")]
    async fn list_emails(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::Email, &req, req.no_total);
        self.execute(&parts, "list_emails", Entity::Email, call).await
    }

    // Target lists

    #[tool(description = "Create a new TargetList in EspoCRM. Fields left unset are not sent.")]
    async fn create_target_list(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<CreateTargetListRequest>,
    ) -> ToolResult {
        let call =
            crud::create(Entity::TargetList, &req, &req.duplicate, req.custom_fields.as_ref());
        self.execute(&parts, "create_target_list", Entity::TargetList, call).await
    }

    #[tool(description = "Get a single TargetList record by ID from EspoCRM.")]
    async fn get_target_list(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<TargetListIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::TargetList, &req.target_list_id);
        self.execute(&parts, "get_target_list", Entity::TargetList, call).await
    }

    #[tool(description = "Update an existing TargetList in EspoCRM. Only the fields provided are changed.")]
    async fn update_target_list(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UpdateTargetListRequest>,
    ) -> ToolResult {
        let call = crud::update(
            Entity::TargetList,
            &req.target_list_id,
            &req,
            req.custom_fields.as_ref(),
        );
        self.execute(&parts, "update_target_list", Entity::TargetList, call).await
    }

    #[tool(description = "Delete a TargetList record by ID from EspoCRM.")]
    async fn delete_target_list(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<TargetListIdRequest>,
    ) -> ToolResult {
        let call = crud::delete(Entity::TargetList, &req.target_list_id);
        self.execute(&parts, "delete_target_list", Entity::TargetList, call).await
    }

    #[tool(description = "List target lists from EspoCRM with optional filtering, sorting, and pagination.")]
    async fn list_target_lists(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::TargetList, &req, req.no_total);
        self.execute(&parts, "list_target_lists", Entity::TargetList, call).await
    }

    // Users

    #[tool(description = "Get a single User record by ID from EspoCRM.")]
    async fn get_user(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<UserIdRequest>,
    ) -> ToolResult {
        let call = crud::get(Entity::User, &req.user_id);
        self.execute(&parts, "get_user", Entity::User, call).await
    }

    #[tool(description = "List User records in EspoCRM with optional filtering, sorting, and pagination. Primary filters: active, portal, api.")]
    async fn list_users(
        &self,
        Extension(parts): Extension<HttpParts>,
        Parameters(req): Parameters<ListRequest>,
    ) -> ToolResult {
        let call = crud::list(Entity::User, &req, req.no_total);
        self.execute(&parts, "list_users", Entity::User, call).await
    }
}

#[tool_handler]
impl ServerHandler for EspoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "EspoCRM tools: create, read, update, delete and list Leads, Contacts, Accounts, \
                 Campaigns, Calls, Emails and TargetLists, and read Users. Requests must carry \
                 X-Api-Key and X-Api-Address headers."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
