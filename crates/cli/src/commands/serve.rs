//! `dsamentor serve`: start the HTTP API and web UI.

use dsamentor_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> dsamentor_core::Result<()> {
    let mut config = AppConfig::load()?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📚 DSA Mentor");
    println!("   Listening: http://{}:{}", config.gateway.host, config.gateway.port);
    println!("   Provider:  {}", config.provider);

    dsamentor_gateway::start(config).await?;

    Ok(())
}
