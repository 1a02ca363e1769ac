//! The choice set and its outcome table.

use std::fmt;
use std::str::FromStr;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Wire value used in select options and command choices.
    pub const fn value(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Choice::Rock => "sedimentary, igneous, or perhaps even metamorphic",
            Choice::Paper => "versatile and iconic",
            Choice::Scissors => "careful ! sharp ! edges !!",
        }
    }

    /// The single choice this one defeats, and the verb used to say so.
    const fn victory(self) -> (Choice, &'static str) {
        match self {
            Choice::Rock => (Choice::Scissors, "crushes"),
            Choice::Paper => (Choice::Rock, "covers"),
            Choice::Scissors => (Choice::Paper, "cuts"),
        }
    }

    pub fn beats(self, other: Choice) -> bool {
        self.victory().0 == other
    }

    pub fn verb_against(self, other: Choice) -> Option<&'static str> {
        let (victim, verb) = self.victory();
        (victim == other).then_some(verb)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Choice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Choice::ALL
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidChoice,
                    format!("'{wanted}' is not one of rock, paper or scissors"),
                )
            })
    }
}

/// Outcome from the point of view of the first argument to [`resolve`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    pub const fn inverse(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

pub fn resolve(first: Choice, second: Choice) -> Outcome {
    if first.beats(second) {
        Outcome::FirstWins
    } else if second.beats(first) {
        Outcome::SecondWins
    } else {
        Outcome::Draw
    }
}

/// Presentation record for a choice in a select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub choice: Choice,
}

impl From<Choice> for ChoiceOption {
    fn from(choice: Choice) -> Self {
        Self {
            label: choice.label(),
            value: choice.value(),
            description: choice.description(),
            choice,
        }
    }
}
