//! The `skillsync show` command.

use anyhow::Result;

use skillsync_core::model::AssessmentId;
use skillsync_core::traits::AssessmentStore;

use super::Target;

pub async fn execute(target: &Target, id: String) -> Result<()> {
    let store = target.open_store()?;
    let id = AssessmentId::new(id);

    match store.read(&id).await? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("Assessment {id} not found."),
    }

    Ok(())
}
