//! The `skillsync export` command.

use std::path::PathBuf;

use anyhow::Result;

use skillsync_core::traits::AssessmentStore;
use skillsync_render::write_csv_file;

use super::Target;

pub async fn execute(target: &Target, output: PathBuf) -> Result<()> {
    let store = target.open_store()?;
    let records = store.list().await?;

    write_csv_file(&records, &output)?;
    println!("CSV exported: {} ({} rows)", output.display(), records.len());
    Ok(())
}
