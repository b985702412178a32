use clap::{Parser, Subcommand};

/// PhysiquePlanner — deterministic meal/training planning and day scoring.
#[derive(Parser, Debug)]
#[command(name = "physique_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub profile: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a day plan: meals, workout, shopping list.
    Plan {
        /// Write the generated plan to this JSON file.
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Show the daily calorie and macro targets.
    Targets,

    /// Score a recorded day against the targets.
    Score {
        /// Day record JSON file; prompts interactively when omitted.
        #[arg(short, long)]
        record: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { out: None }
    }
}
