//! Interactive play loop.

use crate::render;
use chd_core::session::{Outcome, Phase, Session};
use chd_core::KeyValueStore;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Type your diagnosis to answer. Add a reason after 'because' for a bonus.
  :more    reveal the next clue
  :next    go to the next case
  :status  show score and weak categories
  :reset   start over
  :quit    leave (progress is saved)";

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    More,
    Next,
    Reset,
    Status,
    Help,
    Quit,
    Answer {
        response: String,
        rationale: Option<String>,
    },
    Unknown(String),
    Blank,
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        ":more" | ":m" => Input::More,
        ":next" | ":n" => Input::Next,
        ":reset" => Input::Reset,
        ":status" | ":s" => Input::Status,
        ":help" | ":h" | "?" => Input::Help,
        ":quit" | ":q" | ":exit" => Input::Quit,
        cmd if cmd.starts_with(':') => Input::Unknown(trimmed.to_string()),
        _ => {
            let (response, rationale) = split_rationale(trimmed);
            Input::Answer {
                response,
                rationale,
            }
        }
    }
}

/// Split "ASD because fixed split" into answer and rationale.
fn split_rationale(line: &str) -> (String, Option<String>) {
    const MARKER: &str = " because ";

    // ASCII lowercasing keeps byte offsets valid for `line`.
    match line.to_ascii_lowercase().find(MARKER) {
        Some(at) => {
            let rationale = line[at + MARKER.len()..].trim();
            (
                line[..at].trim().to_string(),
                (!rationale.is_empty()).then(|| rationale.to_string()),
            )
        }
        None => (line.to_string(), None),
    }
}

/// Run the loop until `:quit` or end of input.
pub fn play<S, R, W>(session: &mut Session<S>, input: R, out: &mut W) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{HELP}\n")?;
    show_current(session, out)?;

    for line in input.lines() {
        match parse_input(&line?) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Status => {
                writeln!(out, "{}", render::progress(&session.progress()))?;
                writeln!(out, "{}", render::weak_categories(&session.weak_categories()))?;
            }
            Input::More => match session.advance_stage() {
                Outcome::Ignored { reason } => writeln!(out, "({reason})")?,
                _ => show_current(session, out)?,
            },
            Input::Answer {
                response,
                rationale,
            } => match session.submit_answer(&response, rationale.as_deref()) {
                Outcome::Scored { feedback } => {
                    write!(out, "{}", render::feedback(&feedback))?;
                    writeln!(out, "{}", render::progress(&session.progress()))?;
                    writeln!(out, "Type :next for the next case.")?;
                }
                Outcome::Ignored { reason } => writeln!(out, "({reason})")?,
                _ => {}
            },
            Input::Next => match session.next_case() {
                Outcome::Ignored { reason } => writeln!(out, "({reason})")?,
                _ => show_current(session, out)?,
            },
            Input::Reset => {
                session.reset();
                writeln!(out, "Session reset.")?;
                show_current(session, out)?;
            }
            Input::Unknown(cmd) => writeln!(out, "Unknown command {cmd}. Type :help.")?,
        }
    }

    writeln!(out, "{}", render::progress(&session.progress()))?;
    Ok(())
}

fn show_current<S: KeyValueStore, W: Write>(session: &Session<S>, out: &mut W) -> io::Result<()> {
    match session.phase() {
        Phase::Presenting => {
            write!(
                out,
                "{}",
                render::stages(
                    session.visible_stages(),
                    session.snapshot().current_rung,
                    session.current_source()
                )
            )?;
            writeln!(out, "Your answer (:more for another clue):")?;
        }
        Phase::ShowingFeedback => {
            if let Some(feedback) = session.feedback() {
                write!(out, "{}", render::feedback(feedback))?;
            }
            writeln!(out, "Type :next for the next case.")?;
        }
        Phase::Completed => {
            writeln!(out, "All cases complete.")?;
            writeln!(out, "{}", render::progress(&session.progress()))?;
            writeln!(out, "{}", render::weak_categories(&session.weak_categories()))?;
            writeln!(out, "Type :reset to play again or :quit to leave.")?;
        }
    }
    Ok(())
}
