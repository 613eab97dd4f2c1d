//! Randomized obstacle layout generation.
//!
//! Each non-corner cell is independently blocked with a configured
//! probability, drawn in row-major order from a [`SeedRng`]. When
//! solvability is requested, unsolvable layouts are retried with a
//! deterministically perturbed seed (one `'*'` appended per failed
//! attempt), falling back to an all-clear mask after
//! [`MAX_ATTEMPTS`] failures.

use std::fmt;

use gridstep_core::{Mask, MaskError};
use gridstep_paths::path_exists;

use crate::rng::SeedRng;

/// Retry cap for the solvability-guaranteeing loop.
pub const MAX_ATTEMPTS: u32 = 120;

/// Appended to the seed string once per failed attempt.
const PERTURB_MARKER: char = '*';

/// Inputs to [`generate`]. Identical configurations always produce
/// identical output, including the sequence of perturbed seeds tried.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleConfig {
    /// Grid width, must be positive.
    pub width: i32,
    /// Grid height, must be positive.
    pub height: i32,
    /// Per-cell blocking probability in `[0, 1]`. Densities much above
    /// 0.45 rarely produce solvable layouts.
    pub density: f64,
    /// Seed string for the deterministic RNG.
    pub seed: String,
    /// Retry with perturbed seeds until the layout is solvable.
    pub guarantee_solvable: bool,
}

impl ObstacleConfig {
    /// Configuration with solvability guaranteed.
    pub fn new(width: i32, height: i32, density: f64, seed: impl Into<String>) -> Self {
        Self {
            width,
            height,
            density,
            seed: seed.into(),
            guarantee_solvable: true,
        }
    }
}

/// A generated layout plus the provenance a caller may want to surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generated {
    /// The obstacle mask.
    pub mask: Mask,
    /// The (possibly perturbed) seed the returned mask was drawn from.
    /// For the all-clear fallback this is the last seed tried.
    pub seed_used: String,
    /// How many generation attempts ran, `1..=MAX_ATTEMPTS`.
    pub attempts: u32,
}

/// Error for invalid generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// Density outside `[0, 1]` (or NaN).
    InvalidDensity(f64),
    /// Width or height was zero or negative.
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::InvalidDensity(d) => {
                write!(f, "obstacle density must be in [0, 1], got {d}")
            }
            GenError::InvalidSize { width, height } => {
                write!(f, "grid size must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GenError {}

impl From<MaskError> for GenError {
    fn from(err: MaskError) -> Self {
        match err {
            MaskError::NonPositiveSize { width, height } => {
                GenError::InvalidSize { width, height }
            }
            // Unreachable here: the generator always sizes its own vectors.
            MaskError::LengthMismatch { .. } => GenError::InvalidSize {
                width: 0,
                height: 0,
            },
        }
    }
}

/// One generation attempt: block each non-corner cell with probability
/// `density`, drawing in row-major order. The start and goal corners are
/// skipped without consuming a draw.
fn roll_mask(width: i32, height: i32, density: f64, seed: &str) -> Result<Mask, GenError> {
    let mut mask = Mask::new(width, height)?;
    let mut rng = SeedRng::new(seed);
    let start = mask.start();
    let goal = mask.goal();
    for p in mask.bounds().iter() {
        if p == start || p == goal {
            continue;
        }
        if rng.next_f64() < density {
            mask.set(p, true);
        }
    }
    Ok(mask)
}

/// Generate an obstacle mask per `config`.
///
/// With `guarantee_solvable` unset this is a single draw, returned
/// regardless of solvability. Otherwise each attempt is checked with
/// [`path_exists`] and retried under a perturbed seed, up to
/// [`MAX_ATTEMPTS`]; if every attempt fails, the final attempt degrades
/// to an all-clear mask so the result is always solvable.
pub fn generate(config: &ObstacleConfig) -> Result<Generated, GenError> {
    if !(0.0..=1.0).contains(&config.density) {
        return Err(GenError::InvalidDensity(config.density));
    }

    let mut seed = config.seed.clone();
    let mut attempts = 1u32;
    loop {
        let mask = roll_mask(config.width, config.height, config.density, &seed)?;

        if !config.guarantee_solvable || path_exists(&mask) {
            return Ok(Generated {
                mask,
                seed_used: seed,
                attempts,
            });
        }

        if attempts == MAX_ATTEMPTS {
            log::warn!(
                "no solvable layout in {MAX_ATTEMPTS} attempts \
                 (seed {:?}, density {}), falling back to an empty mask",
                config.seed,
                config.density
            );
            return Ok(Generated {
                mask: Mask::new(config.width, config.height)?,
                seed_used: seed,
                attempts,
            });
        }

        log::debug!("attempt {attempts} unsolvable under seed {seed:?}, perturbing");
        seed.push(PERTURB_MARKER);
        attempts += 1;
    }
}
