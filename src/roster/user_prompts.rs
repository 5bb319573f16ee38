//! User interaction for evening out an odd roster
//!
//! These prompts run only when the roster is odd and the user asked to be
//! prompted. Each public prompt has a reader-generic twin so tests can feed
//! canned answers instead of stdin.

use super::odd_count::OddCountChoice;
use crate::error::AppError;
use std::io::Write;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};

const ODD_COUNT_MESSAGE: &str = "Can't make teams of two with an odd number of players!!\n\n\
Input one of the two options below:\n\
\t 1. 'add' - to add a new player\n\
\t 2. 'remove' - to remove a random player from the current list\n";

const NEW_PLAYER_MESSAGE: &str = "Enter the name of the new player.\n\t-->";

const INCORRECT_INPUT_MESSAGE: &str = "*** INCORRECT INPUT ***";

/// Asks on stdin whether to add or remove a player, re-asking until the
/// answer is valid.
///
/// # Returns
/// * `Ok(OddCountChoice)` - The user's choice
/// * `Err(AppError)` - Error reading from stdin, or stdin closed
pub async fn prompt_for_odd_count_choice() -> Result<OddCountChoice, AppError> {
    let mut reader = io::BufReader::new(io::stdin());
    read_odd_count_choice(&mut reader, &mut std::io::stdout()).await
}

/// Asks on stdin for the name of the player to add.
pub async fn prompt_for_player_name() -> Result<String, AppError> {
    let mut reader = io::BufReader::new(io::stdin());
    read_player_name(&mut reader, &mut std::io::stdout()).await
}

pub async fn read_odd_count_choice<R, W>(reader: &mut R, out: &mut W) -> Result<OddCountChoice, AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        write!(out, "{ODD_COUNT_MESSAGE}")?;
        out.flush()?;

        let answer = read_answer(reader).await?;
        if let Some(choice) = OddCountChoice::parse(&answer) {
            return Ok(choice);
        }
        writeln!(out, "{INCORRECT_INPUT_MESSAGE}")?;
    }
}

pub async fn read_player_name<R, W>(reader: &mut R, out: &mut W) -> Result<String, AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        write!(out, "{NEW_PLAYER_MESSAGE}")?;
        out.flush()?;

        let answer = read_answer(reader).await?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        writeln!(out, "{INCORRECT_INPUT_MESSAGE}")?;
    }
}

async fn read_answer<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<String, AppError> {
    let mut input = String::new();
    if reader.read_line(&mut input).await? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )
        .into());
    }
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_choice_accepted_first_time() {
        let mut input: &[u8] = b"remove\n";
        let mut out = Vec::new();

        let choice = read_odd_count_choice(&mut input, &mut out).await.unwrap();
        assert_eq!(choice, OddCountChoice::Remove);
        assert!(String::from_utf8(out).unwrap().contains("'add' - to add a new player"));
    }

    #[tokio::test]
    async fn test_choice_reasks_after_incorrect_input() {
        let mut input: &[u8] = b"maybe\n\nADD\n";
        let mut out = Vec::new();

        let choice = read_odd_count_choice(&mut input, &mut out).await.unwrap();
        assert_eq!(choice, OddCountChoice::Add);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches(INCORRECT_INPUT_MESSAGE).count(), 2);
        assert_eq!(printed.matches("Input one of the two options").count(), 3);
    }

    #[tokio::test]
    async fn test_choice_fails_when_input_closes() {
        let mut input: &[u8] = b"nope\n";
        let mut out = Vec::new();

        let result = read_odd_count_choice(&mut input, &mut out).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_player_name_is_trimmed() {
        let mut input: &[u8] = b"\n  erin  \n";
        let mut out = Vec::new();

        let name = read_player_name(&mut input, &mut out).await.unwrap();
        assert_eq!(name, "erin");
        assert!(String::from_utf8(out).unwrap().contains("Enter the name of the new player."));
    }
}
