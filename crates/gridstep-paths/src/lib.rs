//! Stepped shortest-path search for uniform 4-connected grids.
//!
//! This crate provides the search half of the gridstep workspace:
//!
//! - **[`AstarSearch`]** — an incremental A* engine driven one expansion
//!   at a time via [`AstarSearch::step`], with every piece of per-cell
//!   state observable between steps.
//! - **[`path_exists`]** — a BFS reachability oracle used to validate
//!   generated obstacle layouts.
//! - **[`manhattan`]** — the L1 distance used as the engine's heuristic.
//!
//! Searches always run from the mask's top-left corner to its
//! bottom-right corner with uniform step cost 1, so the Manhattan
//! heuristic is admissible and consistent and the first path found is
//! cost-optimal.

mod distance;
mod engine;
mod reach;

pub use distance::manhattan;
pub use engine::{AstarSearch, CellState, SearchStatus, UNREACHABLE};
pub use reach::path_exists;
