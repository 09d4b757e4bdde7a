#![warn(clippy::pedantic)]

use std::{collections::BTreeSet, fs};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use liftplan_domain::{
    Catalog, Equipment, Exercise, ExerciseFilter, MovementPatternIndex, PlanInput, Planner,
    WorkoutName,
};
use liftplan_storage::{JsonLinesStore, PlanStore};
use log::{debug, info};

mod cli;
mod logger;

use cli::{Cli, Command, ExercisesArgs, LoadArgs, SubstitutesArgs, SuggestArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = logger::level(cli.verbose, std::env::var(logger::ENV_VAR).ok().as_deref());
    logger::init(level).context("failed to initialize logger")?;

    let catalog = Catalog::builtin().context("invalid exercise catalog")?;
    let store = JsonLinesStore::new(&cli.data_dir);
    debug!("using store {}", store.path().display());

    match cli.command {
        Command::Suggest(args) => suggest(&catalog, &store, &args),
        Command::Load(args) => load(&store, &args),
        Command::Saved => saved(&store),
        Command::Exercises(args) => exercises(&catalog, &args),
        Command::Substitutes(args) => substitutes(&catalog, &args),
    }
}

fn suggest(catalog: &Catalog, store: &impl PlanStore, args: &SuggestArgs) -> Result<()> {
    let input = match &args.input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<PlanInput>(&content)
                .with_context(|| format!("invalid plan input in {}", path.display()))?
        }
        None => args
            .plan_input()
            .context("gender, goal, experience and days per week are required")?,
    };

    let name = args.save.as_deref().map(WorkoutName::new).transpose()?;

    let patterns =
        MovementPatternIndex::builtin(catalog).context("invalid movement pattern mapping")?;
    let plan = Planner::new(catalog, &patterns).suggest(&input)?;

    println!("{}", serde_json::to_string_pretty(&plan)?);

    if let Some(name) = name {
        let outcome = store.save(&name, &input, &plan)?;
        if outcome.overwritten {
            info!("updated saved plan '{}'", outcome.name);
        } else {
            info!("saved plan as '{}'", outcome.name);
        }
    }

    Ok(())
}

fn load(store: &impl PlanStore, args: &LoadArgs) -> Result<()> {
    let name = WorkoutName::new(&args.name)?;
    let Some(saved) = store.load(&name)? else {
        bail!("no saved plan named '{name}'");
    };
    println!("{}", serde_json::to_string_pretty(&saved)?);
    Ok(())
}

fn saved(store: &impl PlanStore) -> Result<()> {
    for name in store.names()? {
        let saved_at = WorkoutName::new(&name)
            .ok()
            .map(|n| store.saved_at(&n))
            .transpose()?
            .flatten();
        match saved_at {
            Some(saved_at) => println!(
                "{name:<30}  {}",
                saved_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            ),
            None => println!("{name}"),
        }
    }
    Ok(())
}

fn exercises(catalog: &Catalog, args: &ExercisesArgs) -> Result<()> {
    let filter = ExerciseFilter {
        muscle_group: args.muscle_group,
        sub_region: args.sub_region,
        equipment: available_equipment(&args.equipment, args.preset.map(|p| p.equipment())),
        max_difficulty: args.max_difficulty,
        min_tier: args.min_tier,
        mechanic: args.mechanic,
    };
    print_exercises(&filter.exercises(catalog.exercises().iter()), args.json)
}

fn substitutes(catalog: &Catalog, args: &SubstitutesArgs) -> Result<()> {
    if !catalog.contains(&args.id) {
        bail!("unknown exercise '{}'", args.id);
    }
    let equipment = available_equipment(&args.equipment, None);
    print_exercises(&catalog.substitutes(&args.id, equipment.as_ref()), args.json)
}

/// Bodyweight is added whenever any equipment is given.
fn available_equipment(
    equipment: &[Equipment],
    preset: Option<BTreeSet<Equipment>>,
) -> Option<BTreeSet<Equipment>> {
    if equipment.is_empty() && preset.is_none() {
        return None;
    }
    let mut available = preset.unwrap_or_default();
    available.extend(equipment);
    available.insert(Equipment::Bodyweight);
    Some(available)
}

fn print_exercises(exercises: &[&Exercise], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(exercises)?);
        return Ok(());
    }
    for exercise in exercises {
        println!(
            "{:<2}  {:<45}  {:<22}  {:<10}  {}",
            exercise.tier.as_ref(),
            exercise.id.to_string(),
            exercise.sub_region.as_ref(),
            exercise.mechanic.as_ref(),
            exercise.name
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use liftplan_domain::EquipmentPreset;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[], None, None)]
    #[case(
        &[Equipment::Dumbbell],
        None,
        Some(BTreeSet::from([Equipment::Bodyweight, Equipment::Dumbbell]))
    )]
    #[case(
        &[Equipment::Cable],
        Some(EquipmentPreset::BodyweightOnly),
        Some(BTreeSet::from([Equipment::Bodyweight, Equipment::Cable]))
    )]
    fn test_available_equipment(
        #[case] equipment: &[Equipment],
        #[case] preset: Option<EquipmentPreset>,
        #[case] expected: Option<BTreeSet<Equipment>>,
    ) {
        assert_eq!(
            available_equipment(equipment, preset.map(EquipmentPreset::equipment)),
            expected
        );
    }
}
