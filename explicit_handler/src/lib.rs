//! # mediator-explicit-handler
//! Send [mediator](https://crates.io/crates/mediator) requests while naming,
//! at the call site, the handler that is expected to serve them.
//!
//! The handler hint is only documentation: the request is forwarded to
//! [`Mediator::send`](mediator::Mediator::send) unchanged and the mediator picks
//! the handler registered for the request type, as it always does. Naming the
//! handler makes it easy to jump from the call site to the code that runs.
//!
//! ## Example
//! ```rust
//! use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
//! use mediator_explicit_handler::ExplicitHandlerExt;
//!
//! struct Ping;
//! impl Request<String> for Ping {}
//!
//! #[derive(Default)]
//! struct PingHandler;
//! impl RequestHandler<Ping, String> for PingHandler {
//!     fn handle(&mut self, _: Ping) -> String {
//!         "pong".to_owned()
//!     }
//! }
//!
//! let mut mediator = DefaultMediator::builder()
//!     .add_handler(PingHandler)
//!     .build();
//!
//! let response = mediator
//!     .send_to_explicit_handler(|x| x.of_type::<PingHandler>(), Ping)
//!     .unwrap();
//!
//! assert_eq!("pong", response);
//! assert_eq!(mediator.send(Ping).unwrap(), response);
//! ```

/// Module for the handler type selector.
mod selector;
pub use selector::*;

/// Module for the explicit handler extension traits.
mod explicit;
pub use explicit::*;

/// Module for the cancellation errors.
mod error;
pub use error::*;

/// Blanket implementations of the extension traits.
mod impls;

/// Cancellation token accepted by the `*_with_cancellation` operations.
pub use tokio_util::sync::CancellationToken;
