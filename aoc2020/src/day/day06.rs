use crate::prelude::*;
use std::iter::FromIterator;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<Group>;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let groups = parse_groups(r)?
            .iter()
            .map(|lines| {
                lines
                    .iter()
                    .map(|l| l.chars().collect::<HashSet<char>>())
                    .collect::<Group>()
            })
            .collect_vec();
        info!("Read {} groups", groups.len());
        Ok(groups)
    }

    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1> {
        Ok(input.par_iter().map(Group::count_union).sum())
    }

    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2> {
        Ok(input.par_iter().map(Group::count_intersection).sum())
    }
}

/// The questions each person of a group answered "yes" to.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Group {
    people: Vec<HashSet<char>>,
}

impl FromIterator<HashSet<char>> for Group {
    fn from_iter<I: IntoIterator<Item = HashSet<char>>>(people: I) -> Self {
        Self {
            people: people.into_iter().collect_vec(),
        }
    }
}

impl Group {
    /// Questions anyone in the group answered.
    #[must_use]
    pub fn count_union(&self) -> usize {
        self.people
            .par_iter()
            .flatten()
            .collect::<HashSet<&char>>()
            .len()
    }

    /// Questions everyone in the group answered.
    #[must_use]
    pub fn count_intersection(&self) -> usize {
        let mut people = self.people.iter();
        let first = match people.next() {
            Some(person) => person.clone(),
            None => return 0,
        };

        people
            .fold(first, |acc, person| {
                acc.intersection(person).copied().collect()
            })
            .len()
    }
}
