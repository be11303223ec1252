use crate::{cancelled_error, AsyncExplicitHandlerExt, TypeSelector};
use mediator::{AsyncMediator, AsyncRequestHandler, Request};
use std::any::type_name;
use tokio_util::sync::CancellationToken;

#[async_trait::async_trait]
impl<M> AsyncExplicitHandlerExt for M
where
    M: AsyncMediator + Send,
{
    async fn send_to_explicit_handler<Req, Res, H, F>(
        &mut self,
        handler: F,
        req: Req,
    ) -> mediator::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
        H: AsyncRequestHandler<Req, Res> + Send,
        F: FnOnce(TypeSelector) -> H + Send,
    {
        // The hint only documents the call site, the mediator resolves the handler
        let _ = handler(TypeSelector);

        log::trace!(
            "sending `{}` to explicit async handler `{}`",
            type_name::<Req>(),
            type_name::<H>()
        );

        self.send(req).await
    }

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
        F: FnOnce(TypeSelector) -> H + Send,
    {
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                log::debug!("`{}` was cancelled", type_name::<Req>());
                Err(cancelled_error())
            }

            res = AsyncExplicitHandlerExt::send_to_explicit_handler(self, handler, req) => res,
        }
    }
}
