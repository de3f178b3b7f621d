//! The `scorecast validate` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecast_core::parser;

pub fn execute(record: PathBuf) -> Result<()> {
    let records = if record.is_dir() {
        parser::load_record_directory(&record)?
    } else {
        vec![(record.clone(), parser::parse_record(&record)?)]
    };

    let mut total_warnings = 0;

    for (path, form) in &records {
        println!("Record: {}", path.display());

        let warnings = parser::lint_record(form);
        for w in &warnings {
            let prefix = w
                .field
                .map(|f| format!("  [{f}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All records complete.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
