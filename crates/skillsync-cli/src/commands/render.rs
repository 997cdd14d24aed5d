//! The `skillsync render` command.

use std::path::PathBuf;

use anyhow::Result;

use skillsync_render::write_html_page;

use super::Target;

pub async fn execute(target: &Target, output: PathBuf) -> Result<()> {
    let binder = target.binder()?;
    let state = binder.refresh().await;

    write_html_page(&state, binder.visible_banner().as_ref(), &output)?;
    eprintln!("HTML page: {}", output.display());

    if state.is_failed() {
        anyhow::bail!("error loading assessments");
    }
    println!("Rendered {} assessment(s).", state.records().len());
    Ok(())
}
