//! The `scorecast predict` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use scorecast_client::config::load_config_from;
use scorecast_client::{create_service, HttpScoreService};
use scorecast_core::form::Session;
use scorecast_core::model::FormState;
use scorecast_core::parser;
use scorecast_core::report::{RecordOutcome, RunReport};

pub async fn execute(
    record: Option<PathBuf>,
    set: Vec<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = create_service(&config);

    if let Some(path) = record.as_deref() {
        if path.is_dir() {
            return predict_batch(path, &set, output.as_deref(), &service).await;
        }
    }

    let mut form = match record.as_deref() {
        Some(path) => parser::parse_record(path)?,
        None => FormState::default(),
    };
    apply_overrides(&mut form, &set)?;

    let mut session = Session::from_form(form);
    let missing = session.missing_fields();
    if !missing.is_empty() {
        anyhow::bail!(
            "record is incomplete, missing: {}. Provide them via the record file or --set.",
            missing.join(", ")
        );
    }

    let outcome = session.submit(&service).await?;
    match outcome.prediction() {
        Some(prediction) => {
            println!("Predicted reading score: {}", prediction.formatted_score());
            if let Some(confidence) = prediction.confidence {
                println!("Confidence: {confidence}");
            }
            if !prediction.features_used.is_empty() {
                println!("Features used: {}", prediction.features_used.len());
            }
            Ok(())
        }
        None => {
            let message = outcome
                .failure()
                .unwrap_or("no outcome recorded")
                .to_string();
            Err(anyhow::anyhow!(message))
        }
    }
}

/// Submit every record in a directory, one request at a time.
async fn predict_batch(
    dir: &Path,
    set: &[String],
    output: Option<&Path>,
    service: &HttpScoreService,
) -> Result<()> {
    let records = parser::load_record_directory(dir)?;
    anyhow::ensure!(
        !records.is_empty(),
        "no student records found in {}",
        dir.display()
    );

    eprintln!(
        "Submitting {} record(s) to {}",
        records.len(),
        service.base_url()
    );

    let mut report = RunReport::new(service.base_url());
    for (path, mut form) in records {
        apply_overrides(&mut form, set)?;
        let label = path.display().to_string();

        let mut session = Session::from_form(form);
        if !session.is_complete() {
            report.results.push(RecordOutcome {
                record: label,
                predicted_reading_score: None,
                confidence: None,
                error: Some(format!(
                    "incomplete, missing: {}",
                    session.missing_fields().join(", ")
                )),
            });
            continue;
        }

        let outcome = session.submit(service).await?;
        report.results.push(match outcome.prediction() {
            Some(p) => RecordOutcome {
                record: label,
                predicted_reading_score: Some(p.predicted_reading_score),
                confidence: p.confidence,
                error: None,
            },
            None => RecordOutcome {
                record: label,
                predicted_reading_score: None,
                confidence: None,
                error: outcome.failure().map(str::to_string),
            },
        });
    }

    print_summary(&report);
    println!(
        "\nComplete: {}/{} predicted, {} failed",
        report.predicted(),
        report.results.len(),
        report.failed()
    );

    if let Some(path) = output {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn apply_overrides(form: &mut FormState, set: &[String]) -> Result<()> {
    for entry in set {
        let (name, value) = entry
            .split_once('=')
            .with_context(|| format!("invalid --set '{entry}', expected FIELD=VALUE"))?;
        form.set_field(name.trim(), value.trim())?;
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec!["Record", "Score", "Confidence", "Status"]);

    for result in &report.results {
        let score = result
            .predicted_reading_score
            .map(|s| format!("{s:.1}"))
            .unwrap_or_else(|| "-".to_string());
        let confidence = result
            .confidence
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let status = result.error.clone().unwrap_or_else(|| "ok".to_string());

        table.add_row(vec![
            Cell::new(&result.record),
            Cell::new(score),
            Cell::new(confidence),
            Cell::new(status),
        ]);
    }

    println!("{table}");
}
