//! skillsync CLI — manage skill assessments from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skillsync_core::model::SkillLevel;

mod commands;

#[derive(Parser)]
#[command(name = "skillsync", version, about = "Skill assessment records over HTTP")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Endpoint URL (overrides config and SKILLSYNC_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all assessments
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = commands::list::ListFormat::Table)]
        format: commands::list::ListFormat,
    },

    /// Show one assessment
    Show {
        /// Assessment id
        id: String,
    },

    /// Add an assessment
    Add {
        #[arg(long)]
        employee: String,

        #[arg(long)]
        skill: String,

        /// Beginner, Intermediate, Advanced or Expert
        #[arg(long)]
        current: SkillLevel,

        /// Beginner, Intermediate, Advanced or Expert
        #[arg(long)]
        target: SkillLevel,
    },

    /// Update an existing assessment
    Update {
        /// Assessment id
        id: String,

        #[arg(long)]
        employee: String,

        #[arg(long)]
        skill: String,

        #[arg(long)]
        current: SkillLevel,

        #[arg(long)]
        target: SkillLevel,
    },

    /// Delete an assessment
    Delete {
        /// Assessment id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Render the assessment list as an HTML page
    Render {
        /// Output file
        #[arg(long, default_value = "skill-assessments.html")]
        output: PathBuf,
    },

    /// Export all assessments as CSV
    Export {
        /// Output file
        #[arg(long, default_value = "skills-data.csv")]
        output: PathBuf,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillsync=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let target = commands::Target {
        config: cli.config,
        endpoint: cli.endpoint,
    };

    let result = match cli.command {
        Commands::List { format } => commands::list::execute(&target, format).await,
        Commands::Show { id } => commands::show::execute(&target, id).await,
        Commands::Add {
            employee,
            skill,
            current,
            target: level,
        } => commands::add::execute(&target, employee, skill, current, level).await,
        Commands::Update {
            id,
            employee,
            skill,
            current,
            target: level,
        } => commands::update::execute(&target, id, employee, skill, current, level).await,
        Commands::Delete { id, yes } => commands::delete::execute(&target, id, yes).await,
        Commands::Render { output } => commands::render::execute(&target, output).await,
        Commands::Export { output } => commands::export::execute(&target, output).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
