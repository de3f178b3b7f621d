//! TOML student record parser.
//!
//! Loads student records from TOML files and directories, and lints them
//! for completeness. Records may be partial; every value goes through
//! [`FormState::set_field`] so file input and CLI input share one
//! validation path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::FormState;

/// Intermediate TOML structure for parsing record files.
#[derive(Debug, Deserialize)]
struct TomlRecordFile {
    student: TomlStudent,
}

#[derive(Debug, Default, Deserialize)]
struct TomlStudent {
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    ethnic_group: Option<String>,
    #[serde(default)]
    parent_educ: Option<String>,
    #[serde(default)]
    lunch_type: Option<String>,
    #[serde(default)]
    test_prep: Option<String>,
    #[serde(default)]
    parent_marital_status: Option<String>,
    #[serde(default)]
    practice_sport: Option<String>,
    #[serde(default)]
    is_first_child: Option<String>,
    #[serde(default)]
    nr_siblings: Option<i64>,
    #[serde(default)]
    transport_means: Option<String>,
    #[serde(default)]
    wkly_study_hours: Option<String>,
    #[serde(default)]
    math_score: Option<i64>,
    #[serde(default)]
    writing_score: Option<i64>,
}

/// Parse a single TOML file into a (possibly partial) `FormState`.
pub fn parse_record(path: &Path) -> Result<FormState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record file: {}", path.display()))?;

    parse_record_str(&content, path)
}

/// Parse a TOML string into a `FormState` (useful for testing).
pub fn parse_record_str(content: &str, source_path: &Path) -> Result<FormState> {
    let parsed: TomlRecordFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;
    let student = parsed.student;

    let mut form = FormState::default();
    let strings = [
        ("gender", &student.gender),
        ("ethnic_group", &student.ethnic_group),
        ("parent_educ", &student.parent_educ),
        ("lunch_type", &student.lunch_type),
        ("test_prep", &student.test_prep),
        ("parent_marital_status", &student.parent_marital_status),
        ("practice_sport", &student.practice_sport),
        ("is_first_child", &student.is_first_child),
        ("transport_means", &student.transport_means),
        ("wkly_study_hours", &student.wkly_study_hours),
    ];
    for (name, value) in strings {
        if let Some(raw) = value {
            form.set_field(name, raw)
                .with_context(|| format!("invalid record: {}", source_path.display()))?;
        }
    }

    let integers = [
        ("nr_siblings", student.nr_siblings),
        ("math_score", student.math_score),
        ("writing_score", student.writing_score),
    ];
    for (name, value) in integers {
        if let Some(raw) = value {
            form.set_field(name, &raw.to_string())
                .with_context(|| format!("invalid record: {}", source_path.display()))?;
        }
    }

    Ok(form)
}

/// Recursively load all `.toml` record files from a directory.
///
/// Unparseable files are skipped with a warning; the returned records are
/// sorted by path so batch runs are deterministic.
pub fn load_record_directory(dir: &Path) -> Result<Vec<(PathBuf, FormState)>> {
    let mut records = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            records.extend(load_record_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_record(&path) {
                Ok(form) => records.push((path, form)),
                Err(e) => {
                    tracing::warn!("skipping {}: {e:#}", path.display());
                }
            }
        }
    }

    records.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(records)
}

/// A warning from record linting.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The field the warning is about (if applicable).
    pub field: Option<&'static str>,
    /// Warning message.
    pub message: String,
}

/// Lint a record for completeness without failing.
pub fn lint_record(form: &FormState) -> Vec<ValidationWarning> {
    form.missing_fields()
        .into_iter()
        .map(|field| ValidationWarning {
            field: Some(field),
            message: "field is not set".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_record, Gender};
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[student]
gender = "female"
ethnic_group = "group C"
parent_educ = "bachelor's degree"
lunch_type = "standard"
test_prep = "none"
parent_marital_status = "married"
practice_sport = "sometimes"
is_first_child = "yes"
nr_siblings = 1
transport_means = "schoolbus"
wkly_study_hours = "between 5 and 10hrs"
math_score = 72
writing_score = 70
"#;

    #[test]
    fn parse_complete_record() {
        let form = parse_record_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(form.is_complete());
        assert_eq!(form.complete().unwrap(), sample_record());
        assert!(lint_record(&form).is_empty());
    }

    #[test]
    fn parse_partial_record() {
        let toml = r#"
[student]
gender = "male"
math_score = 55
"#;
        let form = parse_record_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(form.gender, Some(Gender::Male));
        assert_eq!(form.math_score, Some(55));
        assert!(!form.is_complete());

        let warnings = lint_record(&form);
        assert_eq!(warnings.len(), 11);
        assert!(warnings.iter().any(|w| w.field == Some("writing_score")));
        assert!(warnings.iter().all(|w| w.field != Some("gender")));
    }

    #[test]
    fn parse_rejects_out_of_domain_values() {
        let toml = r#"
[student]
gender = "female"
nr_siblings = 12
"#;
        let err = parse_record_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("nr_siblings"));

        let toml = r#"
[student]
lunch_type = "premium"
"#;
        let err = parse_record_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("lunch_type"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_record_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory_skips_bad_files_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("a.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not toml [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let records = load_record_directory(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].0.ends_with("a.toml"));
        assert!(records[1].0.ends_with("b.toml"));
    }

    #[test]
    fn load_directory_rejects_non_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(load_record_directory(file.path()).is_err());
    }
}
