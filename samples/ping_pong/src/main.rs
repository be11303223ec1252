use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use mediator_explicit_handler::{CancellationToken, ExplicitHandlerExt};

struct PingRequest(Option<&'static str>);
impl Request<String> for PingRequest {}

#[derive(Default)]
struct PingRequestHandler;
impl RequestHandler<PingRequest, String> for PingRequestHandler {
    fn handle(&mut self, req: PingRequest) -> String {
        match req.0 {
            Some(name) => format!("Pong, {}!", name),
            None => "Pong!".to_string(),
        }
    }
}

// Implements the same contract but is never registered.
#[derive(Default)]
struct LoudPingRequestHandler;
impl RequestHandler<PingRequest, String> for LoudPingRequestHandler {
    fn handle(&mut self, _: PingRequest) -> String {
        "PONG!".to_string()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("trace"));

    let mut mediator = DefaultMediator::builder()
        .add_handler(PingRequestHandler)
        .build();

    let response = mediator.send_to_explicit_handler(
        |x| x.of_type::<PingRequestHandler>(),
        PingRequest(Some("Rust")),
    )?;
    log::info!("{}", response);

    let response = mediator.send(PingRequest(None))?;
    log::info!("{} (sent without a handler hint)", response);

    // The hint is not used to resolve the handler
    let response = mediator.send_to_explicit_handler(
        |x| x.of_type::<LoudPingRequestHandler>(),
        PingRequest(None),
    )?;
    log::info!("{} (hinted `LoudPingRequestHandler`)", response);

    let token = CancellationToken::new();
    token.cancel();

    match mediator.send_to_explicit_handler_with_cancellation(
        |x| x.of_type::<PingRequestHandler>(),
        PingRequest(None),
        &token,
    ) {
        Ok(response) => log::info!("{}", response),
        Err(err) => log::warn!("{}", err),
    }

    Ok(())
}
