// @zen-component: MCP-AuditHook
//
//! Audit hook: one log line when a tool call starts, one when it finishes.

use async_trait::async_trait;
use espo_core::ResponseEnvelope;
use tracing::{debug, info, warn};

use super::{HookContext, HookError, ToolHook};

/// Logs every tool call through `tracing`. Never rejects.
pub struct AuditHook;

#[async_trait]
impl ToolHook for AuditHook {
    async fn before_call(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        info!(
            call_id = %ctx.call_id,
            tool = %ctx.tool_name,
            api_address = %ctx.api_address,
            %params,
            "tool call received"
        );
        Ok(())
    }

    async fn after_call(
        &self,
        ctx: &HookContext,
        envelope: &mut ResponseEnvelope,
    ) -> Result<(), HookError> {
        let elapsed_ms = (chrono::Utc::now() - ctx.timestamp).num_milliseconds();
        if envelope.ok {
            debug!(
                call_id = %ctx.call_id,
                tool = %ctx.tool_name,
                status = ?envelope.status_code,
                elapsed_ms,
                "tool call succeeded"
            );
        } else {
            warn!(
                call_id = %ctx.call_id,
                tool = %ctx.tool_name,
                status = ?envelope.status_code,
                error_type = ?envelope.error_type,
                error = envelope.error.as_deref().unwrap_or(""),
                elapsed_ms,
                "tool call failed"
            );
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "AuditHook"
    }
}
