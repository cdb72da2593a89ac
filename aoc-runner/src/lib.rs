#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Read, Seek},
    path::{Path, PathBuf},
    str::FromStr,
    time::{Duration, Instant},
};
use tracing::{debug, info};

#[must_use]
pub fn input_path(day: usize) -> PathBuf {
    PathBuf::from(format!("input/day/{:02}.txt", day))
}

pub trait Reader: io::Seek + io::Read + io::BufRead {}

impl<T> Reader for T where T: BufRead + Seek + io::Read {}

pub fn parse_string<R: Reader>(mut r: R) -> Result<String> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .context("input is not valid UTF-8")?;
    Ok(buf)
}

pub fn read_lines<R: Reader>(r: R) -> Result<Vec<String>> {
    r.lines()
        .collect::<io::Result<Vec<_>>>()
        .context("unable to read input lines")
}

/// Parse every whitespace separated token of the input as a `T`.
///
/// The first malformed token aborts parsing.
pub fn parse_tokens<R, T>(r: R) -> Result<Vec<T>>
where
    R: Reader,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let tokens = parse_string(r)?
        .split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .with_context(|| format!("invalid token `{}`", token))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = tokens.len(), "parsed tokens");
    Ok(tokens)
}

/// Parse every non-blank line of the input as a `T`.
pub fn parse_to<R, T>(r: R) -> Result<Vec<T>>
where
    R: Reader,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    read_lines(r)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            line.trim()
                .parse::<T>()
                .with_context(|| format!("line {}: `{}`", n + 1, line))
        })
        .collect()
}

/// Split the input into groups of lines separated by blank lines.
///
/// Runs of blank lines and blank lines at either end never produce empty
/// groups. Lines are trimmed.
pub fn parse_groups<R: Reader>(r: R) -> Result<Vec<Vec<String>>> {
    let lines = read_lines(r)?;
    let groups = lines
        .iter()
        .map(|line| line.trim())
        .group_by(|line| line.is_empty())
        .into_iter()
        .filter(|(blank, _)| !blank)
        .map(|(_, group)| group.map(str::to_owned).collect_vec())
        .collect_vec();

    debug!(count = groups.len(), "parsed groups");
    Ok(groups)
}

pub type FileReader = BufReader<File>;

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<FileReader> {
    let file = File::open(path)?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        bail!("Is a directory");
    }

    Ok(BufReader::new(file))
}

fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let now = Instant::now();
    let out = f();
    (out, now.elapsed())
}

pub trait Solver {
    type Input;
    type Output1: Display;
    type Output2: Display;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1>;
    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2>;

    fn load_input<P: AsRef<Path>>(&self, p: P) -> Result<Self::Input> {
        let p = p.as_ref();
        info!("Opening {}", p.display());
        let f = file_reader(p)?;
        self.parse_input(f)
    }

    /// Solve both parts for `day`, reading `input` or the default
    /// `input/day/NN.txt` when none is given.
    fn solve(&self, day: usize, input: Option<&Path>) -> Result<()> {
        let path = input.map_or_else(|| input_path(day), Path::to_path_buf);
        let input = self.load_input(&path).with_context(|| {
            format!("unable to load input file {}", path.display())
        })?;

        output::print_header();
        output::print_day(day);

        let (first, t) = timed(|| self.solve_first(&input));
        output::print_part(1, &first.context("part 1 failed")?);
        output::print_time(t);
        println!();

        let (second, t) = timed(|| self.solve_second(&input));
        output::print_part(2, &second.context("part 2 failed")?);
        output::print_time(t);
        println!();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn reader(s: &str) -> Cursor<&[u8]> {
        Cursor::new(s.as_bytes())
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let parsed: Vec<i64> =
            parse_tokens(reader("1721\n979 366\r\n  299\t675\n")).unwrap();
        assert_eq!(parsed, vec![1721, 979, 366, 299, 675]);
    }

    #[test]
    fn malformed_token_names_the_token() {
        let err = parse_tokens::<_, i64>(reader("12\nabc\n3")).unwrap_err();
        assert_eq!(err.to_string(), "invalid token `abc`");
    }

    #[test]
    fn lines_skip_blanks() {
        let parsed: Vec<u32> = parse_to(reader("1\n\n 2 \n3\n")).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }

    #[test]
    fn line_errors_carry_line_number() {
        let err = parse_to::<_, u32>(reader("1\nx\n")).unwrap_err();
        assert_eq!(err.to_string(), "line 2: `x`");
    }

    #[test]
    fn groups_ignore_extra_blank_lines() {
        let groups =
            parse_groups(reader("\nabc\n\na\nb\r\n\r\n\n\nc\n\n")).unwrap();
        assert_eq!(
            groups,
            vec![
                vec!["abc".to_owned()],
                vec!["a".to_owned(), "b".to_owned()],
                vec!["c".to_owned()],
            ]
        );
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(parse_groups(reader("")).unwrap().is_empty());
    }

    #[test]
    fn default_input_path_is_zero_padded() {
        assert_eq!(input_path(5), PathBuf::from("input/day/05.txt"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(file_reader("input/day/does-not-exist.txt").is_err());
    }
}
