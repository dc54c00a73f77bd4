use lambda_http::{run, service_fn, Error, Request};
use raise_hand_relay::{handler, App, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env().inspect_err(|err| {
        tracing::error!("Refusing to start: {}", err);
    })?;
    tracing::info!("Loaded configuration: {:?}", config);

    let app = App::new(config);
    let app = &app;

    run(service_fn(move |event: Request| async move {
        handler::function_handler(app, event).await
    }))
    .await
}
