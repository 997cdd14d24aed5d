//! The `skillsync add` command.

use anyhow::Result;

use skillsync_core::model::{AssessmentDraft, SkillLevel};

use super::Target;

pub async fn execute(
    target: &Target,
    employee: String,
    skill: String,
    current: SkillLevel,
    level: SkillLevel,
) -> Result<()> {
    let binder = target.binder()?;
    let draft = AssessmentDraft::new(employee, skill, current, level);

    let result = binder.submit(draft).await;
    if let Some(banner) = binder.banner() {
        if banner.is_error() {
            eprintln!("{}", banner.message);
        } else {
            println!("{}", banner.message);
        }
    }

    let record = result?;
    println!("Id: {}", record.id);
    println!("{} assessment(s) listed.", binder.state().records().len());
    Ok(())
}
