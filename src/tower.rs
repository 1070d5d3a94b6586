//! Tower integration for the handler registry.
//!
//! Exposes registered handlers as Tower [`Service`]s so they can sit behind
//! any Tower middleware stack. Responses are the handler's [`Outcome`]; the
//! service error type is [`Infallible`] because business failures already
//! travel inside the outcome.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::handler::HandlerRegistry;
//! use tower::ServiceExt;
//!
//! let service = registry.into_service();
//! let outcome = service.oneshot(GetUser { id: 42 }).await?;
//! ```

use core::convert::Infallible;
use core::fmt;
use core::future::{ready, Ready};
use core::task::{Context, Poll};

use tower::Service;

use crate::handler::{Handler, HandlerRegistry, Request, SharedHandler};
use crate::types::alloc_type::Arc;
use crate::types::Outcome;

/// A Tower [`Service`] answering requests of type `R` with a single handler.
pub struct HandlerService<R: Request> {
    handler: SharedHandler<R>,
}

impl<R: Request> HandlerService<R> {
    #[inline]
    pub fn new(handler: SharedHandler<R>) -> Self {
        Self { handler }
    }

    /// Returns the wrapped handler.
    #[inline]
    pub fn handler(&self) -> &SharedHandler<R> {
        &self.handler
    }
}

impl<R: Request> Clone for HandlerService<R> {
    fn clone(&self) -> Self {
        Self { handler: Arc::clone(&self.handler) }
    }
}

impl<R: Request> fmt::Debug for HandlerService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerService")
            .field("request", &core::any::type_name::<R>())
            .finish()
    }
}

impl<R: Request> Service<R> for HandlerService<R> {
    type Response = Outcome<R::Output>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    #[inline]
    fn call(&mut self, request: R) -> Self::Future {
        ready(Ok(self.handler.handle(request)))
    }
}

/// A Tower [`Service`] dispatching any [`Request`] through a shared registry.
///
/// Requests without a registered handler resolve to the registry's
/// not-found failure.
#[derive(Clone, Debug)]
pub struct RegistryService {
    registry: Arc<HandlerRegistry>,
}

impl RegistryService {
    #[inline]
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

impl<R: Request> Service<R> for RegistryService {
    type Response = Outcome<R::Output>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    #[inline]
    fn call(&mut self, request: R) -> Self::Future {
        ready(Ok(self.registry.dispatch(request)))
    }
}

impl HandlerRegistry {
    /// Returns a service for the handler registered for `R`, if any.
    #[inline]
    pub fn service<R: Request>(&self) -> Option<HandlerService<R>> {
        self.resolve::<R>().map(HandlerService::new)
    }

    /// Freezes the registry behind an [`Arc`] and serves every request type.
    #[inline]
    pub fn into_service(self) -> RegistryService {
        RegistryService::new(Arc::new(self))
    }
}
