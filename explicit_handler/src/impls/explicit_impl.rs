use crate::{cancelled_error, ExplicitHandlerExt, TypeSelector};
use mediator::{Mediator, Request, RequestHandler};
use std::any::type_name;
use tokio_util::sync::CancellationToken;

#[cfg(feature = "streams")]
use mediator::{StreamRequest, StreamRequestHandler};

#[cfg(feature = "streams")]
use tokio_stream::Stream;

impl<M> ExplicitHandlerExt for M
where
    M: Mediator,
{
    fn send_to_explicit_handler<Req, Res, H, F>(
        &mut self,
        handler: F,
        req: Req,
    ) -> mediator::Result<Res>
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        H: RequestHandler<Req, Res>,
        F: FnOnce(TypeSelector) -> H,
    {
        // The hint only documents the call site, the mediator resolves the handler
        let _ = handler(TypeSelector);

        log::trace!(
            "sending `{}` to explicit handler `{}`",
            type_name::<Req>(),
            type_name::<H>()
        );

        self.send(req)
    }

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
        F: FnOnce(TypeSelector) -> H,
    {
        if token.is_cancelled() {
            log::debug!("`{}` was cancelled before being sent", type_name::<Req>());
            return Err(cancelled_error());
        }

        self.send_to_explicit_handler(handler, req)
    }

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
        F: FnOnce(TypeSelector) -> H,
    {
        let _ = handler(TypeSelector);

        log::trace!(
            "streaming `{}` from explicit handler `{}`",
            type_name::<Req>(),
            type_name::<H>()
        );

        self.stream(req)
    }
}
