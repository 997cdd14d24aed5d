//! The `skillsync list` command.

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

use skillsync_core::model::Assessment;
use skillsync_core::view::ViewState;

use super::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}

pub async fn execute(target: &Target, format: ListFormat) -> Result<()> {
    let binder = target.binder()?;

    let records = match binder.refresh().await {
        ViewState::Failed(e) => anyhow::bail!("error loading assessments: {e}"),
        state => state.records().to_vec(),
    };

    match format {
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        ListFormat::Table => {
            if records.is_empty() {
                println!("No assessments found.");
            } else {
                println!("{}", table(&records));
            }
        }
    }

    Ok(())
}

fn table(records: &[Assessment]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Employee", "Skill", "Current", "Target"]);

    for r in records {
        table.add_row(vec![
            Cell::new(&r.id),
            Cell::new(&r.employee),
            Cell::new(&r.skill),
            Cell::new(&r.current),
            Cell::new(&r.target),
        ]);
    }

    table
}
