use clap::Parser;
use std::path::Path;

use physique_planner_rs::catalog::Catalog;
use physique_planner_rs::cli::{Cli, Command};
use physique_planner_rs::error::Result;
use physique_planner_rs::interface::{
    display_day_plan, display_score, display_targets, prompt_day_record, prompt_plan_request,
    prompt_profile, prompt_yes_no,
};
use physique_planner_rs::models::{PlanRequest, Profile};
use physique_planner_rs::planner::generate_day_plan;
use physique_planner_rs::scoring::score_day;
use physique_planner_rs::storage::{load_profile, load_record, save_plan, save_profile};
use physique_planner_rs::targets::{TargetOverrides, calculate_daily_target};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { out } => cmd_plan(&cli.profile, out.as_deref()),
        Command::Targets => cmd_targets(&cli.profile),
        Command::Score { record } => cmd_score(&cli.profile, record.as_deref()),
    }
}

/// Load the profile file, or prompt for one and offer to save it.
fn load_or_prompt_profile(profile_path: &str) -> Result<Profile> {
    let path = Path::new(profile_path);

    if path.exists() {
        let profile = load_profile(path)?;
        println!("Loaded profile from {}", profile_path);
        return Ok(profile);
    }

    println!("No profile found at {}; let's create one.", profile_path);
    let profile = prompt_profile()?;

    if prompt_yes_no("Save this profile?", true)? {
        save_profile(path, &profile)?;
        println!("Profile saved to {}", profile_path);
    }

    Ok(profile)
}

/// Generate and display a full day plan.
fn cmd_plan(profile_path: &str, out: Option<&str>) -> Result<()> {
    let profile = load_or_prompt_profile(profile_path)?;
    let target = calculate_daily_target(&profile, &TargetOverrides::default())?;
    display_targets(&target);

    let (training, eating_out_slot) = prompt_plan_request(&profile)?;
    let request = PlanRequest::for_profile(&profile, &target, training, eating_out_slot);

    let catalog = Catalog::builtin();
    let plan = generate_day_plan(&catalog, &target, &request);
    display_day_plan(&catalog, &plan);

    if let Some(out_path) = out {
        save_plan(out_path, &plan)?;
        println!("Plan saved to {}", out_path);
    }

    Ok(())
}

/// Show the computed targets without planning.
fn cmd_targets(profile_path: &str) -> Result<()> {
    let profile = load_or_prompt_profile(profile_path)?;
    let target = calculate_daily_target(&profile, &TargetOverrides::default())?;
    display_targets(&target);
    Ok(())
}

/// Score a recorded day against the profile's targets.
fn cmd_score(profile_path: &str, record_path: Option<&str>) -> Result<()> {
    let profile = load_or_prompt_profile(profile_path)?;
    let target = calculate_daily_target(&profile, &TargetOverrides::default())?;

    let catalog = Catalog::builtin();
    let record = match record_path {
        Some(path) => {
            let record = load_record(path)?;
            println!("Loaded day record from {}", path);
            record
        }
        None => prompt_day_record(&catalog)?,
    };

    let result = score_day(&catalog, &record, &target, profile.lifestyle)?;
    display_score(&result);

    Ok(())
}
