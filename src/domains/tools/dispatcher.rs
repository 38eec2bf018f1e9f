//! Tool call dispatcher.
//!
//! Translates one [`CallRequest`] into one [`CallResult`]:
//! resolve the tool, validate its arguments, invoke the handler, and
//! normalize whatever happened into the response envelope. The dispatcher
//! holds no per-request state, so concurrent calls never interfere.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::envelope::{CallRequest, CallResult};
use super::error::ToolError;
use super::handlers::ToolArguments;
use super::registry::{RegisteredTool, ToolDescriptor, ToolRegistry};
use super::validator::validate;

/// Single entry point for tool discovery and invocation.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher owning `registry`.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            timeout: None,
        }
    }

    /// Bound every handler invocation by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Discovery: registered descriptors in registration order.
    pub fn list_tools(&self) -> Vec<&ToolDescriptor> {
        self.registry.list_tools()
    }

    /// Dispatch a call whose arguments have not yet been checked to be an object.
    ///
    /// The tool name is resolved first, so an unknown tool is reported as
    /// such whatever the shape of `arguments`.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> CallResult {
        let tool = match self.resolve(name) {
            Ok(tool) => tool,
            Err(result) => return result,
        };

        match CallRequest::from_value(name, arguments) {
            Ok(request) => self.run(tool, &request.arguments).await,
            Err(e) => {
                warn!("Rejected arguments for {}: {}", name, e);
                CallResult::invalid_arguments(&e)
            }
        }
    }

    /// Resolve, validate, invoke and normalize a single call.
    #[instrument(skip_all, fields(tool = %request.tool_name))]
    pub async fn dispatch(&self, request: CallRequest) -> CallResult {
        match self.resolve(&request.tool_name) {
            Ok(tool) => self.run(tool, &request.arguments).await,
            Err(result) => result,
        }
    }

    fn resolve(&self, name: &str) -> Result<&RegisteredTool, CallResult> {
        let tool = self.registry.resolve(name).map_err(|e| {
            warn!("Unknown tool requested: {}", name);
            CallResult::from(e)
        })?;
        debug!("Resolved tool");
        Ok(tool)
    }

    async fn run(&self, tool: &RegisteredTool, arguments: &ToolArguments) -> CallResult {
        let arguments = match validate(arguments, &tool.descriptor.input_schema) {
            Ok(arguments) => arguments,
            Err(e) => {
                warn!("Argument validation failed: {}", e);
                return ToolError::from(e).into();
            }
        };
        debug!("Arguments validated");

        let result = self.invoke(tool, arguments).await;
        match &result {
            CallResult::Success { content } => {
                info!("Tool call completed ({} content block(s))", content.len())
            }
            CallResult::Failure { message, .. } => error!("Tool call failed: {}", message),
        }
        result
    }

    async fn invoke(&self, tool: &RegisteredTool, arguments: ToolArguments) -> CallResult {
        let call = AssertUnwindSafe(tool.handler.call(arguments)).catch_unwind();

        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!("Tool timed out after {:?}", limit);
                    return ToolError::Timeout.into();
                }
            },
            None => call.await,
        };

        match outcome {
            Ok(Ok(output)) => CallResult::success(output),
            Ok(Err(e)) => CallResult::internal_error(e.to_string()),
            Err(panic) => CallResult::internal_error(format!(
                "Tool '{}' panicked: {}",
                tool.descriptor.name,
                panic_message(panic.as_ref())
            )),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
