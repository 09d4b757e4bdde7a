use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use liftplan_domain::{
    Difficulty, Equipment, EquipmentPreset, Mechanic, MuscleGroup, PlanInput, SubRegion, Tier,
};

#[derive(Parser, Debug)]
#[command(
    name = "liftplan",
    version,
    about = "Strength training plans from an evidence ranked exercise catalog"
)]
pub struct Cli {
    /// Directory containing saved plans
    #[arg(
        long,
        value_name = "DIR",
        env = "LIFTPLAN_DATA_DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly plan
    Suggest(SuggestArgs),
    /// Print a saved plan
    Load(LoadArgs),
    /// List saved plans
    Saved,
    /// Query the exercise catalog
    Exercises(ExercisesArgs),
    /// List alternatives for an exercise
    Substitutes(SubstitutesArgs),
}

#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// JSON file containing the plan input
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["gender", "goal", "experience", "equipment", "days_per_week", "session_duration"]
    )]
    pub input: Option<PathBuf>,

    #[arg(long, required_unless_present = "input")]
    pub gender: Option<String>,

    #[arg(long, required_unless_present = "input")]
    pub goal: Option<String>,

    #[arg(long, required_unless_present = "input")]
    pub experience: Option<String>,

    /// Available equipment, bodyweight is always included
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub equipment: Vec<String>,

    #[arg(long, value_name = "N", required_unless_present = "input")]
    pub days_per_week: Option<i64>,

    /// Session length in minutes
    #[arg(long, value_name = "MINUTES")]
    pub session_duration: Option<i64>,

    /// Save the generated plan under this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

impl SuggestArgs {
    /// Plan input assembled from the individual flags.
    pub fn plan_input(&self) -> Option<PlanInput> {
        Some(PlanInput {
            gender: self.gender.clone()?,
            goal: self.goal.clone()?,
            experience: self.experience.clone()?,
            equipment: self.equipment.clone(),
            days_per_week: self.days_per_week?,
            session_duration: self.session_duration,
        })
    }
}

#[derive(Parser, Debug)]
pub struct LoadArgs {
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct ExercisesArgs {
    #[arg(long)]
    pub muscle_group: Option<MuscleGroup>,

    #[arg(long)]
    pub sub_region: Option<SubRegion>,

    /// Only exercises that can be done with this equipment
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub equipment: Vec<Equipment>,

    /// Named equipment set, combined with --equipment
    #[arg(long)]
    pub preset: Option<EquipmentPreset>,

    #[arg(long)]
    pub max_difficulty: Option<Difficulty>,

    #[arg(long)]
    pub min_tier: Option<Tier>,

    #[arg(long)]
    pub mechanic: Option<Mechanic>,

    /// Print the matching exercises as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SubstitutesArgs {
    pub id: String,

    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub equipment: Vec<Equipment>,

    /// Print the substitutes as JSON
    #[arg(long)]
    pub json: bool,
}
