//! Request Dispatcher
//!
//! Routes a typed command or query to the single handler registered for its
//! type. The registry is filled once in the composition root and then shared
//! read-only behind an `Arc`, so lookups need no synchronization.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::OperationContext;
use crate::error::AppResult;

/// A command or query that can be sent through the [`Dispatcher`]
pub trait Request: Send + 'static {
    /// What the handler returns on success
    type Response: Send + 'static;
}

/// Handles exactly one request type
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R, context: &OperationContext) -> AppResult<R::Response>;
}

/// Dispatcher errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("A handler is already registered for {0}")]
    DuplicateRegistration(&'static str),

    #[error("No handler registered for {0}")]
    NoHandlerRegistered(&'static str),
}

struct Registration {
    request_type: &'static str,
    // Always an `Arc<dyn RequestHandler<R>>` for the `R` whose TypeId keys it
    handler: Box<dyn Any + Send + Sync>,
}

/// Registry mapping request types to their handlers
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<TypeId, Registration>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to request type `R`
    pub fn register<R, H>(&mut self, handler: H) -> Result<(), DispatchError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            return Err(DispatchError::DuplicateRegistration(type_name::<R>()));
        }

        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        self.handlers.insert(
            key,
            Registration {
                request_type: type_name::<R>(),
                handler: Box::new(handler),
            },
        );

        tracing::debug!(request_type = type_name::<R>(), "Registered request handler");
        Ok(())
    }

    /// Invoke the handler registered for `R` and return its result unchanged
    pub async fn send<R: Request>(
        &self,
        request: R,
        context: &OperationContext,
    ) -> AppResult<R::Response> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|registration| {
                registration
                    .handler
                    .downcast_ref::<Arc<dyn RequestHandler<R>>>()
            })
            .ok_or(DispatchError::NoHandlerRegistered(type_name::<R>()))?;

        tracing::debug!(
            request_type = type_name::<R>(),
            correlation_id = ?context.correlation_id,
            "Dispatching request"
        );

        handler.handle(request, context).await
    }

    /// Names of all registered request types
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.values().map(|r| r.request_type).collect();
        names.sort_unstable();
        names
    }

    /// Whether a handler is registered for `R` (test-only helper)
    #[cfg(test)]
    pub fn is_registered<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.registered_types())
            .finish()
    }
}
