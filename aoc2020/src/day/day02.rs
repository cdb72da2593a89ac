use crate::prelude::*;
use regex::Regex;
use std::num::ParseIntError;
use thiserror::Error;

pub struct Answer;

lazy_static! {
    static ref ENTRY: Regex =
        Regex::new(r"^(\d+)-(\d+) (\S): (\S*)$").expect("valid entry regex");
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParsePasswordError {
    #[error("`{0}` does not look like `N-M c: password`")]
    Format(String),
    #[error("invalid policy number")]
    Number(#[from] ParseIntError),
}

/// One line of the password database: the policy numbers, the policy letter
/// and the password they apply to.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone)]
pub struct Password {
    low: usize,
    high: usize,
    letter: char,
    entry: String,
}

impl FromStr for Password {
    type Err = ParsePasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ENTRY
            .captures(s.trim())
            .ok_or_else(|| ParsePasswordError::Format(s.to_owned()))?;

        Ok(Password {
            low: caps[1].parse()?,
            high: caps[2].parse()?,
            letter: caps[3]
                .chars()
                .next()
                .ok_or_else(|| ParsePasswordError::Format(s.to_owned()))?,
            entry: caps[4].to_owned(),
        })
    }
}

/// How the two numbers in front of a password are interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Policy {
    /// The letter occurs at least `low` and at most `high` times.
    CountRange,
    /// Exactly one of the 1-based positions `low` and `high` holds the
    /// letter. Positions past the end of the password never match.
    ExactlyOnePosition,
}

impl Policy {
    #[must_use]
    pub fn is_valid(self, p: &Password) -> bool {
        match self {
            Policy::CountRange => {
                let occurs = p.entry.matches(p.letter).count();
                occurs >= p.low && occurs <= p.high
            },
            Policy::ExactlyOnePosition => {
                let holds = |pos: usize| {
                    pos.checked_sub(1)
                        .and_then(|i| p.entry.chars().nth(i))
                        .map_or(false, |c| c == p.letter)
                };
                holds(p.low) ^ holds(p.high)
            },
        }
    }
}

pub fn count_valid(passwords: &[Password], policy: Policy) -> usize {
    passwords.iter().filter(|&p| policy.is_valid(p)).count()
}

impl Solver for Answer {
    type Input = Vec<Password>;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let passwords: Vec<Password> = parse_to(r)?;
        info!("Read {} entries", passwords.len());
        Ok(passwords)
    }

    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1> {
        Ok(count_valid(input, Policy::CountRange))
    }

    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2> {
        Ok(count_valid(input, Policy::ExactlyOnePosition))
    }
}
