use button_notifier::{
    clients::sns::SnsClient, config::Config, models::event::ButtonEvent, utils::process_event,
};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let sns_client = SnsClient::connect().await;

    let func = service_fn(move |event: LambdaEvent<ButtonEvent>| {
        let config = config.clone();
        let sns_client = sns_client.clone();

        async move {
            process_event(&event.payload, &config, &sns_client)
                .await
                .map_err(Error::from)
        }
    });

    run(func).await
}
