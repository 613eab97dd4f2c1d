//! Deterministic obstacle generation for gridstep.
//!
//! - **[`SeedRng`]** — a string-seeded PRNG with identical output on
//!   every platform (also usable anywhere `rand::RngCore` is accepted).
//! - **[`generate`]** — draws an obstacle [`Mask`](gridstep_core::Mask)
//!   at a target density and, when asked, retries under perturbed seeds
//!   until the reachability oracle confirms a start-to-goal path.

mod obstacles;
mod rng;

pub use obstacles::{GenError, Generated, MAX_ATTEMPTS, ObstacleConfig, generate};
pub use rng::SeedRng;
