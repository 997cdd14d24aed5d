//! The `skillsync update` command.

use anyhow::Result;

use skillsync_core::model::{AssessmentDraft, AssessmentId, SkillLevel};

use super::Target;

pub async fn execute(
    target: &Target,
    id: String,
    employee: String,
    skill: String,
    current: SkillLevel,
    level: SkillLevel,
) -> Result<()> {
    let binder = target.binder()?;
    let record = AssessmentDraft::new(employee, skill, current, level)
        .into_assessment_with_id(AssessmentId::new(id))?;

    let result = binder.update(&record).await;
    if let Some(banner) = binder.banner() {
        if banner.is_error() {
            eprintln!("{}", banner.message);
        } else {
            println!("{}", banner.message);
        }
    }

    result?;
    Ok(())
}
