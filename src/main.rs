use dotenvy::dotenv;
use pharmacist_service::config::Settings;
use pharmacist_service::observability::init_tracing;
use pharmacist_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("info");

    let settings = Settings::load();
    let app = Application::build(settings).await?;
    app.run_until_stopped().await?;

    Ok(())
}
