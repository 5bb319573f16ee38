use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// What to do when two-player teams are requested for an odd roster
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OddPolicy {
    /// Ask whether to add a player or remove a random one
    #[default]
    Prompt,
    /// Add a player (the placeholder name, or ask for one)
    Add,
    /// Remove a random player
    Remove,
    /// Stop with an error listing the players
    Fail,
}

/// Returns true when the invocation only touches configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Bracket Planner
///
/// Randomly assigns players from a roster file to teams and decides who plays
/// whom in the first round. With an odd number of teams one team
/// automatically advances to the second round.
///
/// Each roster line is one player. Players that cannot be teamed together
/// follow `!!` on the same line, like:
/// player one !!cant match this player !!or this player
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the roster file (.txt) with one player per line.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Number of players on each team. Defaults to the configured value (2).
    #[arg(
        short = 'p',
        long = "players-per-team",
        value_parser = clap::value_parser!(u8).range(1..=2)
    )]
    pub players_per_team: Option<u8>,

    /// How to handle an odd number of players when making teams of two.
    #[arg(long = "on-odd", value_enum, default_value_t = OddPolicy::Prompt)]
    pub on_odd: OddPolicy,

    /// Name of the player added when evening out an odd roster.
    /// Overrides the configured placeholder name.
    #[arg(long = "placeholder", value_name = "NAME")]
    pub placeholder: Option<String>,

    /// Seed for the random generator, for reproducible brackets.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Print without colors.
    #[arg(long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// Print the bracket as JSON instead of a table.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Also write logs to stderr, including every rejected partner draw.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
