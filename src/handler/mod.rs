//! Explicit registry of command and query handlers.
//!
//! Handlers are registered one by one against the request type they serve and
//! resolved later by that type. Every handler answers with an
//! [`Outcome`], so dispatch never needs a second error channel.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::handler::{handler_fn, Command, HandlerRegistry, Request};
//! use outcome_rail::validation::ValidationErrorBuilder;
//! use outcome_rail::Outcome;
//!
//! struct Register {
//!     email: String,
//! }
//!
//! impl Request for Register {
//!     type Output = ();
//! }
//! impl Command for Register {}
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register(handler_fn(|cmd: Register| {
//!     let mut builder = ValidationErrorBuilder::create();
//!     if cmd.email.is_empty() {
//!         builder.add("Email", "Email is required");
//!     }
//!     builder.to_outcome()
//! }));
//!
//! let outcome = registry.dispatch(Register { email: String::new() });
//! assert!(outcome.is_failure());
//! ```
use core::any::{type_name, Any, TypeId};
use core::fmt;
use core::marker::PhantomData;

use crate::types::alloc_type::{Arc, BTreeMap, Box};
use crate::types::{Error, Outcome};

#[cfg(not(feature = "std"))]
use alloc::format;

/// Code of the failure returned when no handler serves a request type.
pub const HANDLER_NOT_FOUND: &str = "Handler.NotFound";

/// A message that can be dispatched to exactly one handler.
pub trait Request: 'static {
    /// Success value produced by the handler.
    type Output: 'static;
}

/// Marker for requests that change state.
pub trait Command: Request {}

/// Marker for requests that only read state.
pub trait Query: Request {}

/// Handles requests of type `R`.
pub trait Handler<R: Request>: Send + Sync {
    fn handle(&self, request: R) -> Outcome<R::Output>;
}

impl<R, H> Handler<R> for Arc<H>
where
    R: Request,
    H: Handler<R> + ?Sized,
{
    #[inline]
    fn handle(&self, request: R) -> Outcome<R::Output> {
        (**self).handle(request)
    }
}

/// Handler built from a closure, see [`handler_fn`].
pub struct HandlerFn<F, R> {
    f: F,
    _request: PhantomData<fn(R)>,
}

/// Wraps a closure as a [`Handler`].
#[inline]
pub fn handler_fn<F, R>(f: F) -> HandlerFn<F, R>
where
    R: Request,
    F: Fn(R) -> Outcome<R::Output> + Send + Sync,
{
    HandlerFn { f, _request: PhantomData }
}

impl<F, R> Handler<R> for HandlerFn<F, R>
where
    R: Request,
    F: Fn(R) -> Outcome<R::Output> + Send + Sync,
{
    #[inline]
    fn handle(&self, request: R) -> Outcome<R::Output> {
        (self.f)(request)
    }
}

impl<F, R> Clone for HandlerFn<F, R>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self { f: self.f.clone(), _request: PhantomData }
    }
}

impl<F, R> fmt::Debug for HandlerFn<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("request", &type_name::<R>()).finish()
    }
}

/// Shared handle to a registered handler.
pub type SharedHandler<R> = Arc<dyn Handler<R>>;

/// Request-type keyed collection of handlers.
///
/// Each request type has at most one handler; registering another replaces
/// it. The registry is read-only once built and can be shared across threads.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl HandlerRegistry {
    #[inline]
    pub fn new() -> Self {
        Self { handlers: BTreeMap::new() }
    }

    /// Registers `handler` for request type `R`, replacing any previous one.
    pub fn register<R, H>(&mut self, handler: H) -> &mut Self
    where
        R: Request,
        H: Handler<R> + 'static,
    {
        let shared: SharedHandler<R> = Arc::new(handler);
        let replaced = self.handlers.insert(TypeId::of::<R>(), Box::new(shared)).is_some();

        #[cfg(feature = "tracing")]
        tracing::debug!(request = type_name::<R>(), replaced, "registered handler");
        #[cfg(not(feature = "tracing"))]
        let _ = replaced;

        self
    }

    /// Builder-style [`register`](HandlerRegistry::register).
    #[inline]
    pub fn with<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: Handler<R> + 'static,
    {
        self.register::<R, H>(handler);
        self
    }

    /// Returns the handler registered for `R`.
    pub fn resolve<R: Request>(&self) -> Option<SharedHandler<R>> {
        self.handlers
            .get(&TypeId::of::<R>())
            .and_then(|handler| handler.downcast_ref::<SharedHandler<R>>())
            .cloned()
    }

    #[inline]
    pub fn contains<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    /// Sends `request` to its handler.
    ///
    /// Fails with an [`Error::NotFound`] coded [`HANDLER_NOT_FOUND`] when no
    /// handler is registered for `R`.
    pub fn dispatch<R: Request>(&self, request: R) -> Outcome<R::Output> {
        match self.resolve::<R>() {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(request = type_name::<R>(), "dispatching request");

                handler.handle(request)
            },
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(request = type_name::<R>(), "no handler registered");

                Outcome::failure(Error::not_found(
                    HANDLER_NOT_FOUND,
                    format!("No handler is registered for {}.", type_name::<R>()),
                ))
            },
        }
    }

    /// Number of registered request types.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry").field("handlers", &self.handlers.len()).finish()
    }
}
