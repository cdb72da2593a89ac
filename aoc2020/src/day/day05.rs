use crate::prelude::*;
use num_traits::One;
use thiserror::Error;

pub struct Answer;

const ROW_CHARS: usize = 7;
const COLUMN_CHARS: usize = 3;
const PASS_LEN: usize = ROW_CHARS + COLUMN_CHARS;
const MAX_SEAT_ID: u32 = (1 << PASS_LEN) - 1;

impl Solver for Answer {
    type Input = Vec<SeatId>;
    type Output1 = SeatId;
    type Output2 = SeatId;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let seats: Vec<SeatId> = parse_to(r)?;
        info!("Read {} entries", seats.len());
        Ok(seats)
    }

    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1> {
        input.iter().max().copied().context("no boarding passes")
    }

    /// The only empty seat with both neighbours taken.
    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2> {
        let taken = input.iter().map(|s| s.0).collect::<HashSet<u32>>();
        let empty = empty_seats(input);
        let listing = empty.iter().join(" ");
        debug!(count = empty.len(), seats = %listing, "Seats left");

        empty
            .into_iter()
            .find(|seat| {
                seat.0 > 0
                    && taken.contains(&(seat.0 - 1))
                    && taken.contains(&seat.plus_one().0)
            })
            .context("no empty seat between two taken ones")
    }
}

/// Every seat ID on the plane that no boarding pass claims, ascending.
pub fn empty_seats(taken: &[SeatId]) -> Vec<SeatId> {
    let taken = taken.iter().collect::<HashSet<_>>();
    (0..=MAX_SEAT_ID)
        .map(SeatId)
        .filter(|seat| !taken.contains(seat))
        .collect_vec()
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseSeatError {
    #[error("boarding pass must be 10 characters, got {0}")]
    Length(usize),
    #[error("unexpected `{character}` at position {position}")]
    Character { character: char, position: usize },
}

/// A boarding pass read as a 10 bit number: `row * 8 + column`.
#[derive(
    Debug,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Copy,
    Clone,
    Default,
    Hash,
    num_derive::NumOps,
    num_derive::One,
)]
pub struct SeatId(u32);

impl SeatId {
    fn plus_one(self) -> Self {
        self + Self::one()
    }

    #[must_use]
    pub fn row(self) -> u32 {
        self.0 >> COLUMN_CHARS
    }

    #[must_use]
    pub fn column(self) -> u32 {
        self.0 & ((1 << COLUMN_CHARS) - 1)
    }
}

impl FromStr for SeatId {
    type Err = ParseSeatError;

    /// `F`/`B` pick the row half and `L`/`R` the column half; the upper
    /// half is a set bit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != PASS_LEN {
            return Err(ParseSeatError::Length(len));
        }

        s.chars()
            .enumerate()
            .try_fold(0_u32, |id, (position, character)| {
                let bit = match (position < ROW_CHARS, character) {
                    (true, 'F') | (false, 'L') => 0,
                    (true, 'B') | (false, 'R') => 1,
                    _ => {
                        return Err(ParseSeatError::Character {
                            character,
                            position,
                        })
                    },
                };
                Ok((id << 1) | bit)
            })
            .map(Self)
    }
}

impl Deref for SeatId {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    #[test]
    fn decode() {
        let s = seat("FBFBBFFRLR");
        assert_eq!((s.row(), s.column(), *s), (44, 5, 357));
        assert_eq!(*seat("BFFFBBFRRR"), 567);
        assert_eq!(*seat("FFFBBBFRRR"), 119);
        assert_eq!(*seat("BBFFBBFRLL"), 820);
        assert_eq!(*seat("FFFFFFFLLL"), 0);
        assert_eq!(*seat("BBBBBBBRRR"), MAX_SEAT_ID);
    }

    #[test]
    fn decode_rejects_bad_passes() {
        assert_eq!(
            "FBFBBFFRL".parse::<SeatId>(),
            Err(ParseSeatError::Length(9))
        );
        assert_eq!(
            "FBFBBFFRLX".parse::<SeatId>(),
            Err(ParseSeatError::Character {
                character: 'X',
                position: 9
            })
        );
        // column letters are not valid in the row half
        assert_eq!(
            "FBFBBFLRLR".parse::<SeatId>(),
            Err(ParseSeatError::Character {
                character: 'L',
                position: 6
            })
        );
    }

    #[test]
    fn first() {
        let input = Answer
            .parse_input(Cursor::new(
                &b"FBFBBFFRLR\nBFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n"[..],
            ))
            .unwrap();
        assert_eq!(*Answer.solve_first(&input).unwrap(), 820);
    }

    #[test]
    fn first_needs_a_pass() {
        assert!(Answer.solve_first(&vec![]).is_err());
    }

    #[test]
    fn second_finds_gap() {
        let input = (40..=50).filter(|&n| n != 45).map(SeatId).collect_vec();
        assert_eq!(*Answer.solve_second(&input).unwrap(), 45);
    }

    #[test]
    fn second_without_gap_fails() {
        let input = (40..=50).map(SeatId).collect_vec();
        assert!(Answer.solve_second(&input).is_err());
    }

    #[test]
    fn empty_seats_lists_every_gap() {
        let taken = (1..MAX_SEAT_ID)
            .filter(|&n| n != 45)
            .map(SeatId)
            .collect_vec();
        assert_eq!(
            empty_seats(&taken),
            vec![SeatId(0), SeatId(45), SeatId(MAX_SEAT_ID)]
        );
        assert_eq!(empty_seats(&taken).iter().join(" "), "0 45 1023");
    }

    #[test]
    fn empty_seats_cover_the_plane() {
        let taken = (1..=MAX_SEAT_ID).map(SeatId).collect_vec();
        assert_eq!(empty_seats(&taken), vec![SeatId(0)]);
        assert_eq!(empty_seats(&[]).len(), MAX_SEAT_ID as usize + 1);
    }
}
