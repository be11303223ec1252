/// Implements `ExplicitHandlerExt` for every `Mediator`.
mod explicit_impl;

/// Implements `AsyncExplicitHandlerExt` for every `AsyncMediator`.
#[cfg(feature = "async")]
mod async_explicit_impl;
