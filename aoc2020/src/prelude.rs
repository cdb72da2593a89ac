pub use anyhow::{Context, Result};
pub use itertools::Itertools;
pub use lazy_static::lazy_static;
pub use rayon::prelude::*;
pub use tracing::{debug, info};

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use aoc_runner::{parse_groups, parse_to, parse_tokens, Reader, Solver};
pub use common::HashSet;

///////////////////////////////////////////////////////////////////////////////
////
//// * stdlib
////
///////////////////////////////////////////////////////////////////////////////
pub use std::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};
