//! The `scorecast health` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecast_client::config::load_config_from;
use scorecast_client::create_service;
use scorecast_core::traits::ScoreService;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = create_service(&config);

    let health = service.health().await?;

    println!("Service: {}", service.base_url());
    println!("Status: {}", health.status);
    if let Some(loaded) = health.model_loaded {
        println!("Model loaded: {loaded}");
    }
    if let Some(features) = health.features {
        println!("Features: {features}");
    }
    if let (Some(train), Some(test)) = (health.train_score, health.test_score) {
        println!("Train/test score: {train:.2}/{test:.2}");
    }

    if !health.is_healthy() {
        anyhow::bail!(
            "service is unhealthy: {}",
            health.error.unwrap_or_else(|| "no detail".into())
        );
    }

    Ok(())
}
