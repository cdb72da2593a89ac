use crate::prelude::*;
use common::search::{find_pair, find_triplet};

/// Every combination must add up to this.
pub const TARGET: i64 = 2020;

pub struct Answer;

/// Entries from the expense report that add up to [`TARGET`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Combination {
    values: Vec<i64>,
    product: i64,
}

impl Combination {
    /// Fails when the product of the matched entries doesn't fit in `i64`.
    fn from_positions(entries: &[i64], positions: &[usize]) -> Result<Self> {
        let values = positions.iter().map(|&i| entries[i]).collect_vec();
        let product = values
            .iter()
            .try_fold(1_i64, |acc, &v| acc.checked_mul(v))
            .with_context(|| {
                let factors = values.iter().join(" * ");
                format!("product of {} overflows i64", factors)
            })?;

        Ok(Self { values, product })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Always [`TARGET`]; adding the entries directly could overflow on the
    /// way there.
    pub fn sum(&self) -> i64 {
        TARGET
    }

    pub fn product(&self) -> i64 {
        self.product
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}, {} = {}",
            self.values.iter().join(" + "),
            self.sum(),
            self.values.iter().join(" * "),
            self.product()
        )
    }
}

impl Solver for Answer {
    /// Entries in non-decreasing order.
    type Input = Vec<i64>;
    type Output1 = Combination;
    type Output2 = Combination;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let mut entries: Vec<i64> = parse_tokens(r)?;
        info!("Read {} entries", entries.len());
        entries.sort_unstable();
        Ok(entries)
    }

    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1> {
        let (i, j) = find_pair(input, TARGET)?;
        debug!(i, j, "found pair");
        Combination::from_positions(input, &[i, j])
    }

    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2> {
        let (i, j, k) = find_triplet(input, TARGET)?;
        debug!(i, j, k, "found triplet");
        Combination::from_positions(input, &[i, j, k])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use common::NotFound;
    use std::io::Cursor;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    fn input(s: &str) -> Vec<i64> {
        Answer.parse_input(Cursor::new(s.as_bytes())).unwrap()
    }

    #[test]
    fn parse_sorts_entries() {
        assert_eq!(input(EXAMPLE), vec![299, 366, 675, 979, 1456, 1721]);
    }

    #[test]
    fn malformed_entry_aborts() {
        assert!(Answer.parse_input(Cursor::new(&b"12\n1x\n"[..])).is_err());
    }

    #[test]
    fn first() {
        let pair = Answer.solve_first(&input(EXAMPLE)).unwrap();
        assert_eq!(pair.values(), &[299, 1721]);
        assert_eq!(pair.sum(), TARGET);
        assert_eq!(pair.product(), 514_579);
        assert_eq!(pair.to_string(), "299 + 1721 = 2020, 299 * 1721 = 514579");
    }

    #[test]
    fn second() {
        let triplet = Answer.solve_second(&input(EXAMPLE)).unwrap();
        assert_eq!(triplet.values(), &[366, 675, 979]);
        assert_eq!(triplet.product(), 241_861_950);
        assert_eq!(
            triplet.to_string(),
            "366 + 675 + 979 = 2020, 366 * 675 * 979 = 241861950"
        );
    }

    #[test]
    fn product_overflow_is_an_error() {
        let entries = input("-1000000000000 1000000002020");
        let err = Answer.solve_first(&entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "product of -1000000000000 * 1000000002020 overflows i64"
        );
    }

    #[test]
    fn negative_entry_gives_negative_product() {
        let entries = input("4020 -3000 1000");
        let triplet = Answer.solve_second(&entries).unwrap();
        assert_eq!(triplet.values(), &[-3000, 1000, 4020]);
        assert_eq!(triplet.sum(), TARGET);
        assert_eq!(triplet.product(), -12_060_000_000);
    }

    #[test]
    fn no_match_is_an_error() {
        let entries = input("10 20");
        let err = Answer.solve_first(&entries).unwrap_err();
        assert_eq!(
            err.downcast_ref::<NotFound<i64>>(),
            Some(&NotFound::Pair(TARGET))
        );

        let err = Answer.solve_second(&entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no triplet found that sums to provided value (2020)"
        );
    }
}
