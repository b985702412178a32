use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use physique_planner_rs::catalog::Catalog;
use physique_planner_rs::error::Result;
use physique_planner_rs::models::{
    BloodType, DietStyle, Gender, Goal, Lifestyle, PlanRequest, Profile, TrainingContext,
    TrainingSplit, TrainingStyle,
};
use physique_planner_rs::planner::generate_day_plan;
use physique_planner_rs::targets::{TargetOverrides, calculate_daily_target};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Random-profile stress sweep for the day-plan generator")]
struct Args {
    /// Number of random profiles to run
    #[arg(long, default_value = "200")]
    iters: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Output CSV file for per-run results
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Number of worst misses to display
    #[arg(long, default_value = "10")]
    topk: usize,
}

const GOALS: [Goal; 3] = [Goal::Maintain, Goal::Cut, Goal::Bulk];
const DIET_STYLES: [DietStyle; 4] = [
    DietStyle::Balanced,
    DietStyle::LowFat,
    DietStyle::LowCarb,
    DietStyle::Ketogenic,
];
const SPLITS: [TrainingSplit; 13] = [
    TrainingSplit::Legs,
    TrainingSplit::LowerBody,
    TrainingSplit::Back,
    TrainingSplit::Pull,
    TrainingSplit::BackBiceps,
    TrainingSplit::Chest,
    TrainingSplit::Push,
    TrainingSplit::ChestTriceps,
    TrainingSplit::Shoulders,
    TrainingSplit::ShouldersArms,
    TrainingSplit::Arms,
    TrainingSplit::FullBody,
    TrainingSplit::UpperBody,
];

/// One sampled profile and its macro miss against the target.
struct SweepRun {
    profile: Profile,
    training: Option<TrainingContext>,
    calories: f64,
    protein_err: f64,
    fat_err: f64,
    carb_err: f64,
    within_tolerance: bool,
}

impl SweepRun {
    fn max_err(&self) -> f64 {
        self.protein_err.max(self.fat_err).max(self.carb_err)
    }

    fn describe(&self) -> String {
        let training = match &self.training {
            Some(t) => format!("{:?} after meal {}", t.split, t.after_meal),
            None => "rest".to_string(),
        };
        format!(
            "{:.0}kg {:.0}%bf act{} {:?} {:?} {:?} {} meals, {}",
            self.profile.weight_kg,
            self.profile.body_fat_pct,
            self.profile.activity_level,
            self.profile.goal,
            self.profile.diet_style,
            self.profile.lifestyle,
            self.profile.meals_per_day,
            training
        )
    }
}

fn random_profile(rng: &mut StdRng) -> Profile {
    Profile {
        weight_kg: rng.gen_range(50.0..=120.0),
        body_fat_pct: rng.gen_range(8.0..=40.0),
        age: rng.gen_range(18..=60),
        gender: if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        },
        goal: GOALS[rng.gen_range(0..GOALS.len())],
        diet_style: DIET_STYLES[rng.gen_range(0..DIET_STYLES.len())],
        activity_level: rng.gen_range(1..=5),
        custom_activity_multiplier: None,
        lifestyle: if rng.gen_bool(0.3) {
            Lifestyle::Bodymaker
        } else {
            Lifestyle::General
        },
        blood_type: BloodType::A,
        cost_tier: rng.gen_range(1..=2),
        meals_per_day: rng.gen_range(3..=6),
    }
}

fn random_training(rng: &mut StdRng, meal_count: u32) -> Option<TrainingContext> {
    if rng.gen_bool(0.25) {
        return None;
    }
    Some(TrainingContext {
        after_meal: rng.gen_range(1..=meal_count),
        split: SPLITS[rng.gen_range(0..SPLITS.len())],
        style: if rng.gen_bool(0.5) {
            TrainingStyle::Power
        } else {
            TrainingStyle::Pump
        },
        duration_min: rng.gen_range(30..=120),
    })
}

fn run_sweep(iters: usize, seed: u64) -> Result<Vec<SweepRun>> {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut runs = Vec::with_capacity(iters);

    for _ in 0..iters {
        let profile = random_profile(&mut rng);
        let training = random_training(&mut rng, profile.meals_per_day);

        let target = calculate_daily_target(&profile, &TargetOverrides::default())?;
        let request = PlanRequest::for_profile(&profile, &target, training, None);
        let plan = generate_day_plan(&catalog, &target, &request);

        let rel = |delta: f64, target_g: f64| {
            if target_g > 0.0 { delta.abs() / target_g } else { 0.0 }
        };
        let diag = &plan.diagnostics;

        runs.push(SweepRun {
            profile,
            training,
            calories: target.calories,
            protein_err: rel(diag.protein_delta, target.protein_g),
            fat_err: rel(diag.fat_delta, target.fat_g),
            carb_err: rel(diag.carb_delta, target.carb_g),
            within_tolerance: diag.within_tolerance,
        });
    }

    Ok(runs)
}

fn write_csv(runs: &[SweepRun], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "run",
        "weight_kg",
        "body_fat_pct",
        "activity",
        "goal",
        "diet_style",
        "lifestyle",
        "meals",
        "training",
        "calories",
        "protein_err",
        "fat_err",
        "carb_err",
        "within_tolerance",
    ])?;

    for (i, run) in runs.iter().enumerate() {
        let training = match &run.training {
            Some(t) => format!("{:?}@{}", t.split, t.after_meal),
            None => "rest".to_string(),
        };
        wtr.write_record([
            (i + 1).to_string(),
            format!("{:.1}", run.profile.weight_kg),
            format!("{:.1}", run.profile.body_fat_pct),
            run.profile.activity_level.to_string(),
            format!("{:?}", run.profile.goal),
            format!("{:?}", run.profile.diet_style),
            format!("{:?}", run.profile.lifestyle),
            run.profile.meals_per_day.to_string(),
            training,
            format!("{:.0}", run.calories),
            format!("{:.4}", run.protein_err),
            format!("{:.4}", run.fat_err),
            format!("{:.4}", run.carb_err),
            run.within_tolerance.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn print_worst(runs: &[SweepRun], k: usize) {
    let mut indices: Vec<usize> = (0..runs.len()).collect();
    indices.sort_by(|&a, &b| {
        runs[b]
            .max_err()
            .partial_cmp(&runs[a].max_err())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!();
    println!("=== Top {} worst misses ===", k.min(runs.len()));
    for &idx in indices.iter().take(k) {
        let run = &runs[idx];
        println!(
            "run {:>4}: max {:.1}% (P {:.1}% F {:.1}% C {:.1}%)  {}",
            idx + 1,
            run.max_err() * 100.0,
            run.protein_err * 100.0,
            run.fat_err * 100.0,
            run.carb_err * 100.0,
            run.describe()
        );
    }
}

fn main() {
    let args = Args::parse();

    println!("Sweeping {} random profiles (seed {})", args.iters, args.seed);

    let runs = match run_sweep(args.iters, args.seed) {
        Ok(runs) => runs,
        Err(e) => {
            eprintln!("Sweep failed: {}", e);
            std::process::exit(1);
        }
    };

    let within = runs.iter().filter(|r| r.within_tolerance).count();
    println!(
        "Within 5% tolerance: {}/{} ({:.1}%)",
        within,
        runs.len(),
        within as f64 / runs.len() as f64 * 100.0
    );

    print_worst(&runs, args.topk);

    if let Err(e) = write_csv(&runs, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!();
        println!("Wrote per-run results to {:?}", args.csv);
    }
}
