//! Solver diagnostics for `aoc2020`: which input file was opened, how many
//! entries it held, the positions a search matched and the unoccupied seats.
//! Answers are printed by `aoc_runner::output`; everything here goes to
//! stderr so it never mixes with them.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, `warn` and above unless `RUST_LOG` says
/// otherwise.
///
/// ```bash
/// RUST_LOG=aoc2020=debug,aoc_runner=debug aoc2020 -d 5 -i seats.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
