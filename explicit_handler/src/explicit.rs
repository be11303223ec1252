use crate::TypeSelector;
use mediator::{Mediator, Request, RequestHandler};
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use mediator::{AsyncMediator, AsyncRequestHandler};

#[cfg(feature = "streams")]
use mediator::{StreamRequest, StreamRequestHandler};

#[cfg(feature = "streams")]
use tokio_stream::Stream;

/// Sends requests to an explicitly specified handler.
///
/// The handler is given by a hint closure `|x| x.of_type::<MyRequestHandler>()`
/// whose return type must be a handler of the same request and response.
/// The hint is never used to resolve the handler: the request goes through
/// [`Mediator::send`] and is served by whatever handler the mediator has
/// registered for it.
pub trait ExplicitHandlerExt: Mediator {
    /// Sends a request to the mediator, naming the handler expected to serve it.
    fn send_to_explicit_handler<Req, Res, H, F>(
        &mut self,
        handler: F,
        req: Req,
    ) -> mediator::Result<Res>
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        H: RequestHandler<Req, Res>,
        F: FnOnce(TypeSelector) -> H;

    /// Sends a request to the mediator, naming the handler expected to serve it.
    ///
    /// If `token` is already cancelled the request is not sent and
    /// [`cancelled_error`](crate::cancelled_error) is returned.
    fn send_to_explicit_handler_with_cancellation<Req, Res, H, F>(
        &mut self,
        handler: F,
        req: Req,
        token: &CancellationToken,
    ) -> mediator::Result<Res>
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        H: RequestHandler<Req, Res>,
        F: FnOnce(TypeSelector) -> H;

    /// Sends a stream request to the mediator, naming the handler expected to serve it.
    #[cfg(feature = "streams")]
    fn stream_from_explicit_handler<Req, S, T, H, F>(
        &mut self,
        handler: F,
        req: Req,
    ) -> mediator::Result<S>
    where
        Req: StreamRequest<Stream = S, Item = T> + 'static,
        S: Stream<Item = T> + 'static,
        T: 'static,
        H: StreamRequestHandler<Request = Req, Stream = S, Item = T>,
        F: FnOnce(TypeSelector) -> H;
}

/// Sends requests to an explicitly specified async handler.
///
/// Async counterpart of [`ExplicitHandlerExt`] for any [`AsyncMediator`].
#[cfg(feature = "async")]
#[cfg_attr(feature = "async", async_trait::async_trait)]
pub trait AsyncExplicitHandlerExt: AsyncMediator {
    /// Sends a request to the mediator, naming the handler expected to serve it.
    async fn send_to_explicit_handler<Req, Res, H, F>(
        &mut self,
        handler: F,
        req: Req,
    ) -> mediator::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
        H: AsyncRequestHandler<Req, Res> + Send,
        F: FnOnce(TypeSelector) -> H + Send;

    /// Sends a request to the mediator, naming the handler expected to serve it.
    ///
    /// The request is raced against `token`; once the token is cancelled the
    /// pending send is dropped and [`cancelled_error`](crate::cancelled_error)
    /// is returned.
    async fn send_to_explicit_handler_with_cancellation<Req, Res, H, F>(
        &mut self,
        handler: F,
        req: Req,
        token: &CancellationToken,
    ) -> mediator::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
        H: AsyncRequestHandler<Req, Res> + Send,
        F: FnOnce(TypeSelector) -> H + Send;
}
