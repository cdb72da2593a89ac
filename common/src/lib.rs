#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod search;

pub use search::{find_distinct_triplet, find_pair, find_triplet, NotFound};

use fnv::FnvBuildHasher;

pub type HashSet<T> = std::collections::HashSet<T, FnvBuildHasher>;
