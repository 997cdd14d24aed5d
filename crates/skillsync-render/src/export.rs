//! CSV export of assessment records.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use skillsync_core::model::Assessment;

/// Write `records` as CSV with a `SkillAssessmentId,Employee,Skill,Current,Target` header.
pub fn write_csv<W: Write>(records: &[Assessment], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if records.is_empty() {
        wtr.write_record(["SkillAssessmentId", "Employee", "Skill", "Current", "Target"])?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` as CSV to `path`.
pub fn write_csv_file(records: &[Assessment], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(records, file)
}
