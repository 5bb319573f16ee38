//! Console output for a generated bracket
//!
//! Names keep their roster casing everywhere except here, where every word
//! is capitalized.

use crate::bracket::{Bracket, Matchup, Team};
use crate::constants::display::{BANNER_TITLE, RULE_WIDTH};
use crate::error::AppError;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

fn rule_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
fn banner_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
fn label_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
fn team_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
fn versus_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
fn bye_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta

/// Printable view of a bracket
pub struct BracketPage<'a> {
    bracket: &'a Bracket,
    color: bool,
}

impl<'a> BracketPage<'a> {
    pub fn new(bracket: &'a Bracket, color: bool) -> Self {
        BracketPage { bracket, color }
    }

    /// Writes the banner, one line per matchup numbered from 1, and a closing
    /// rule block.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let rule = "-".repeat(RULE_WIDTH);
        let stars = "*".repeat((RULE_WIDTH - BANNER_TITLE.len() - 2) / 2);

        self.write_line(out, &rule, rule_fg())?;
        self.write_line(out, &format!("{stars} {BANNER_TITLE} {stars}"), banner_fg())?;
        self.write_line(out, &rule, rule_fg())?;

        for (game_number, matchup) in self.bracket.matchups.iter().enumerate() {
            match matchup {
                Matchup::Game { home, away } => self.write_game(out, game_number + 1, home, away)?,
                Matchup::Bye { team } => self.write_bye(out, team)?,
            }
        }

        self.write_line(out, &rule, rule_fg())?;
        self.write_line(out, &"*".repeat(RULE_WIDTH), banner_fg())?;
        self.write_line(out, &rule, rule_fg())?;

        out.flush()?;
        Ok(())
    }

    fn write_game<W: Write>(
        &self,
        out: &mut W,
        game_number: usize,
        home: &Team,
        away: &Team,
    ) -> Result<(), AppError> {
        self.write_span(out, &format!("Game {game_number}:"), label_fg())?;
        self.write_span(out, &format!("   {}", home.display_label()), team_fg())?;
        self.write_span(out, "\t vs.\t ", versus_fg())?;
        self.write_span(out, &away.display_label(), team_fg())?;
        writeln!(out)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_bye<W: Write>(&self, out: &mut W, team: &Team) -> Result<(), AppError> {
        self.write_span(out, "Automatically advances to second round: ", bye_fg())?;
        self.write_span(out, &team.display_label(), team_fg())?;
        writeln!(out)?;
        Ok(())
    }

    fn write_line<W: Write>(&self, out: &mut W, text: &str, color: Color) -> Result<(), AppError> {
        self.write_span(out, text, color)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_span<W: Write>(&self, out: &mut W, text: &str, color: Color) -> Result<(), AppError> {
        if self.color {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
        } else {
            write!(out, "{text}")?;
        }
        Ok(())
    }
}

/// Writes the bracket as pretty-printed JSON followed by a newline
pub fn render_json<W: Write>(bracket: &Bracket, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, bracket)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
