use crate::cli::{Args, OddPolicy, is_config_operation};
use bracket_planner::bracket::{
    BracketSettings, RandomSource, Record, TeamSize, ensure_minimum_players, generate_bracket,
};
use bracket_planner::config::Config;
use bracket_planner::error::AppError;
use bracket_planner::presenter::{BracketPage, render_json};
use bracket_planner::roster::user_prompts::{prompt_for_odd_count_choice, prompt_for_player_name};
use bracket_planner::roster::{OddCountChoice, add_player, load_roster, remove_random_player};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::stdout;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.file.is_none() && !is_config_operation(args) {
        return Err(AppError::config_error(
            "A roster file is required (use -f/--file <FILE>)",
        ));
    }
    if args.placeholder.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(AppError::config_error("Placeholder name cannot be empty"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await
}

/// Applies the requested change to the config file at `path` and saves it.
///
/// The file is read as stored: environment overrides are not applied, so
/// they never end up persisted. An unreadable or invalid file is reported
/// and left untouched.
async fn update_config_file(path: &str, args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored(path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Creates the random source for a run, seeded when `--seed` is given.
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => {
            info!("Using fixed seed {seed}");
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Where the name of an added player comes from
enum NewPlayerSource<'a> {
    Placeholder(&'a str),
    Prompt,
}

/// Makes an odd roster even according to `policy`.
///
/// Even rosters are returned untouched.
async fn resolve_odd_roster<R: RandomSource>(
    records: &mut Vec<Record>,
    policy: OddPolicy,
    placeholder: Option<&str>,
    rng: &mut R,
) -> Result<(), AppError> {
    if records.len() % 2 == 0 {
        return Ok(());
    }

    let choice = match policy {
        OddPolicy::Fail => {
            return Err(AppError::odd_player_count(
                records.iter().map(|r| r.name.as_str()),
            ));
        }
        OddPolicy::Add => OddCountChoice::Add,
        OddPolicy::Remove => OddCountChoice::Remove,
        OddPolicy::Prompt => prompt_for_odd_count_choice().await?,
    };

    match choice {
        OddCountChoice::Remove => {
            if let Some(removed) = remove_random_player(records, rng) {
                println!("\nREMOVING PLAYER: {}\n", removed.name.display_name());
            }
        }
        OddCountChoice::Add => {
            let source = match placeholder {
                Some(name) => NewPlayerSource::Placeholder(name),
                None => NewPlayerSource::Prompt,
            };
            add_new_player(records, source).await?;
        }
    }
    Ok(())
}

async fn add_new_player(records: &mut Vec<Record>, source: NewPlayerSource<'_>) -> Result<(), AppError> {
    match source {
        NewPlayerSource::Placeholder(name) => {
            add_player(records, name)?;
        }
        NewPlayerSource::Prompt => loop {
            let name = prompt_for_player_name().await?;
            match add_player(records, &name) {
                Ok(_) => break,
                Err(e) if e.is_input_error() => println!("{e}"),
                Err(e) => return Err(e),
            }
        },
    }
    Ok(())
}

/// Loads the roster, evens it out if needed, generates the bracket and
/// prints it.
pub async fn handle_generate_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let path = args
        .file
        .as_deref()
        .ok_or_else(|| AppError::config_error("A roster file is required"))?;

    let mut records = load_roster(path).await?;
    ensure_minimum_players(records.len())?;

    let settings: BracketSettings = config.bracket_settings(args.players_per_team)?;
    let mut rng = make_rng(args.seed);

    if settings.team_size == TeamSize::Pair {
        let placeholder = args.placeholder.as_deref().or(config.placeholder_name.as_deref());
        resolve_odd_roster(&mut records, args.on_odd, placeholder, &mut rng).await?;
    }

    let bracket = match generate_bracket(records, settings, &mut rng) {
        Ok(bracket) => bracket,
        Err(e) => {
            if e.is_restart_recommended() {
                eprintln!("{e}");
                eprintln!("Run the program again to draw a new set of teams.");
            }
            return Err(e);
        }
    };

    info!(
        "Generated {} teams in {} matchups",
        bracket.team_count(),
        bracket.matchups.len()
    );

    let mut out = stdout();
    if args.json {
        render_json(&bracket, &mut out)
    } else {
        BracketPage::new(&bracket, config.color && !args.plain).render(&mut out)
    }
}
