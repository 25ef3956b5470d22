use anyhow::Result;
use bakery_ui::config::Config;
use bakery_ui::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    if let Some(path) = logger::setup(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    log::info!("Starting toast demo");
    ui::run_app(&config).await?;
    log::info!("Toast demo exited");

    Ok(())
}
