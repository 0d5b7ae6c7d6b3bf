use hostedauth::{config::Config, routes, state::AppState};
use lambda_http::{run, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env()?;
    let app = routes::router(AppState::new(config));

    run(app).await
}
