//! The `scorecast model-info` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecast_client::config::load_config_from;
use scorecast_client::create_service;
use scorecast_core::traits::ScoreService;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = create_service(&config);

    let info = service.model_info().await?;

    println!("Model type: {}", info.model_type);
    if let Some(n) = info.num_features {
        println!("Features: {n}");
    }
    if !info.features.is_empty() {
        println!("Feature names: {}", info.features.join(", "));
    }
    if let Some(score) = info.training_score {
        println!("Training score: {score:.3}");
    }
    if let Some(score) = info.test_score {
        println!("Test score: {score:.3}");
    }
    if let Some(mse) = info.mse {
        println!("MSE: {mse:.2}");
    }
    if let Some(mae) = info.mae {
        println!("MAE: {mae:.2}");
    }

    Ok(())
}
