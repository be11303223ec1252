use mediator::{AsyncRequestHandler, DefaultAsyncMediator, Request};
use mediator_explicit_handler::{is_cancelled, AsyncExplicitHandlerExt, CancellationToken};
use std::time::Duration;

struct PingRequest(String);
impl Request<String> for PingRequest {}

struct DelayedPingRequest(Duration);
impl Request<Duration> for DelayedPingRequest {}

#[derive(Default)]
struct PingRequestHandler;

#[async_trait::async_trait]
impl AsyncRequestHandler<PingRequest, String> for PingRequestHandler {
    async fn handle(&mut self, req: PingRequest) -> String {
        format!("Pong, {}!", req.0)
    }
}

#[derive(Default)]
struct DelayedPingRequestHandler;

#[async_trait::async_trait]
impl AsyncRequestHandler<DelayedPingRequest, Duration> for DelayedPingRequestHandler {
    async fn handle(&mut self, req: DelayedPingRequest) -> Duration {
        tokio::time::sleep(req.0).await;
        req.0
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("trace"));

    let mut mediator = DefaultAsyncMediator::builder()
        .add_handler(PingRequestHandler)
        .add_handler(DelayedPingRequestHandler)
        .build();

    let response = mediator
        .send_to_explicit_handler(
            |x| x.of_type::<PingRequestHandler>(),
            PingRequest("Rust".to_owned()),
        )
        .await?;
    log::info!("{}", response);

    let token = CancellationToken::new();
    let shutdown = token.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        shutdown.cancel();
    });

    for millis in [50, 100, 1_000] {
        let res = mediator
            .send_to_explicit_handler_with_cancellation(
                |x| x.of_type::<DelayedPingRequestHandler>(),
                DelayedPingRequest(Duration::from_millis(millis)),
                &token,
            )
            .await;

        match res {
            Ok(elapsed) => log::info!("Pong after {:?}", elapsed),
            Err(err) if is_cancelled(&err) => log::warn!("Ping of {}ms cancelled", millis),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
