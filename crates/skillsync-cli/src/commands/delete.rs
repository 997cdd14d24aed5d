//! The `skillsync delete` command.

use anyhow::Result;

use skillsync_core::model::AssessmentId;
use skillsync_core::traits::FixedAnswer;
use skillsync_core::DeleteOutcome;

use super::{StdinConfirm, Target};

pub async fn execute(target: &Target, id: String, yes: bool) -> Result<()> {
    let binder = target.binder()?;
    let id = AssessmentId::new(id);

    let outcome = if yes {
        binder.delete(&id, &FixedAnswer(true)).await
    } else {
        binder.delete(&id, &StdinConfirm).await
    };
    if let Ok(DeleteOutcome::Cancelled) = outcome {
        println!("Cancelled.");
        return Ok(());
    }

    if let Some(banner) = binder.banner() {
        if banner.is_error() {
            eprintln!("{}", banner.message);
        } else {
            println!("{}", banner.message);
        }
    }

    outcome?;
    Ok(())
}
