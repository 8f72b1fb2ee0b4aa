// @awa-component: MCP-HookPipeline
//
//! Hook pipeline for EspoCRM tool calls.
//!
//! Hooks run before and after every tool call. They can inspect or rewrite
//! the normalized parameters, inspect or rewrite the response envelope, or
//! reject a call before anything is sent upstream.

pub mod audit;

use std::sync::Arc;

use async_trait::async_trait;
use espo_core::{Entity, ResponseEnvelope};
use uuid::Uuid;

/// Context passed to hooks for each tool call.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Unique per invocation; ties the before and after log lines together.
    pub call_id: Uuid,
    pub tool_name: String,
    pub entity: Entity,
    /// EspoCRM instance the call is aimed at.
    pub api_address: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HookContext {
    pub fn new(tool_name: &str, entity: Entity, api_address: &str) -> Self {
        Self {
            call_id: Uuid::new_v4(),
            tool_name: tool_name.to_string(),
            entity,
            api_address: api_address.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Scope at which a hook applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookScope {
    Global,
    Entity(Entity),
    Tenant(String),
    TenantEntity(String, Entity),
}

/// Errors that can occur in hooks.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Call rejected: {0}")]
    Rejected(String),

    #[error("Hook error: {0}")]
    Internal(String),
}

/// Hook trait. `before_call` runs in pipeline order; `after_call` runs in
/// reverse order (onion model).
#[async_trait]
pub trait ToolHook: Send + Sync {
    /// Called before the upstream request. Return Err to reject the call.
    async fn before_call(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError>;

    /// Called once the envelope is known.
    async fn after_call(
        &self,
        ctx: &HookContext,
        envelope: &mut ResponseEnvelope,
    ) -> Result<(), HookError>;

    fn name(&self) -> &str;
}

/// Ordered pipeline of hooks.
pub struct HookPipeline {
    hooks: Vec<(HookScope, Arc<dyn ToolHook>)>,
}

impl HookPipeline {
    pub fn new(hooks: Vec<(HookScope, Arc<dyn ToolHook>)>) -> Self {
        Self { hooks }
    }

    pub fn empty() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Run all matching before_call hooks in order. Short-circuits on error.
    pub async fn run_before(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        for (scope, hook) in &self.hooks {
            if scope_matches(scope, ctx) {
                hook.before_call(ctx, params).await?;
            }
        }
        Ok(())
    }

    /// Run all matching after_call hooks in reverse order.
    pub async fn run_after(
        &self,
        ctx: &HookContext,
        envelope: &mut ResponseEnvelope,
    ) -> Result<(), HookError> {
        for (scope, hook) in self.hooks.iter().rev() {
            if scope_matches(scope, ctx) {
                hook.after_call(ctx, envelope).await?;
            }
        }
        Ok(())
    }
}

fn scope_matches(scope: &HookScope, ctx: &HookContext) -> bool {
    match scope {
        HookScope::Global => true,
        HookScope::Entity(entity) => ctx.entity == *entity,
        HookScope::Tenant(address) => ctx.api_address == *address,
        HookScope::TenantEntity(address, entity) => {
            ctx.api_address == *address && ctx.entity == *entity
        }
    }
}

/// Build the default pipeline: audit logging only.
pub fn default_pipeline() -> HookPipeline {
    HookPipeline::new(vec![(HookScope::Global, Arc::new(audit::AuditHook))])
}
