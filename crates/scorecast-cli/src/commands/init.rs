//! The `scorecast init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create scorecast.toml
    if std::path::Path::new("scorecast.toml").exists() {
        println!("scorecast.toml already exists, skipping.");
    } else {
        std::fs::write("scorecast.toml", SAMPLE_CONFIG)?;
        println!("Created scorecast.toml");
    }

    // Create example student record
    std::fs::create_dir_all("records")?;
    let example_path = std::path::Path::new("records/example.toml");
    if example_path.exists() {
        println!("records/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_RECORD)?;
        println!("Created records/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit scorecast.toml to point at your prediction service");
    println!("  2. Run: scorecast validate --record records/example.toml");
    println!("  3. Run: scorecast predict --record records/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# scorecast configuration

base_url = "http://localhost:8000"
timeout_secs = 30
"#;

const EXAMPLE_RECORD: &str = r#"[student]
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
