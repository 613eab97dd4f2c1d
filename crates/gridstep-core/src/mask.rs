//! The obstacle mask: one boolean per grid cell.
//!
//! A [`Mask`] owns its dimensions, so every mask that exists is internally
//! consistent — constructors reject non-positive sizes and length
//! mismatches up front, which lets everything downstream (the search
//! engine, the reachability oracle) index without defensive checks.

use std::fmt;

use crate::geom::{Point, Range};

/// Per-cell obstacle flags for a `width × height` grid.
///
/// Cells are stored row-major (`i = y * width + x`); `true` means
/// impassable. By convention the search start is the top-left corner and
/// the goal the bottom-right one, but the mask itself does not treat any
/// cell specially.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

/// Error building a [`Mask`] from caller-supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Width or height was zero or negative.
    NonPositiveSize { width: i32, height: i32 },
    /// The supplied cell vector does not have `width * height` entries.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::NonPositiveSize { width, height } => {
                write!(f, "grid size must be positive, got {width}x{height}")
            }
            MaskError::LengthMismatch { expected, actual } => {
                write!(f, "mask has {actual} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MaskError {}

impl Mask {
    /// Create an all-free mask of the given dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, MaskError> {
        if width <= 0 || height <= 0 {
            return Err(MaskError::NonPositiveSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        })
    }

    /// Build a mask from an existing row-major cell vector.
    pub fn from_cells(width: i32, height: i32, cells: Vec<bool>) -> Result<Self, MaskError> {
        if width <= 0 || height <= 0 {
            return Err(MaskError::NonPositiveSize { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(MaskError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A mask is never empty; this exists for clippy symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The bounding range `[(0,0), (width,height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The conventional search start, top-left corner (index 0).
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The conventional search goal, bottom-right corner (last index).
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Convert a `Point` to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    ///
    /// # Panics
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        assert!(idx < self.cells.len(), "cell index {idx} out of bounds");
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether the cell at `p` is impassable. Out-of-bounds counts as
    /// blocked, so callers can test candidate neighbors directly.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => true,
        }
    }

    /// Mark the cell at `p` blocked or free. Out-of-bounds points are
    /// ignored.
    pub fn set(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = blocked;
        }
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Row-major view of the raw cell flags.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_dims() {
        assert!(matches!(
            Mask::new(0, 5),
            Err(MaskError::NonPositiveSize { .. })
        ));
        assert!(matches!(
            Mask::new(5, -1),
            Err(MaskError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn from_cells_rejects_length_mismatch() {
        let err = Mask::from_cells(3, 3, vec![false; 8]).unwrap_err();
        assert_eq!(
            err,
            MaskError::LengthMismatch {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn index_round_trip() {
        let mask = Mask::new(4, 3).unwrap();
        for p in mask.bounds().iter() {
            let i = mask.idx(p).unwrap();
            assert_eq!(mask.point(i), p);
        }
        assert_eq!(mask.idx(Point::new(4, 0)), None);
        assert_eq!(mask.idx(Point::new(0, 3)), None);
        assert_eq!(mask.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn corners() {
        let mask = Mask::new(5, 4).unwrap();
        assert_eq!(mask.idx(mask.start()), Some(0));
        assert_eq!(mask.idx(mask.goal()), Some(19));
    }

    #[test]
    fn set_and_query() {
        let mut mask = Mask::new(3, 3).unwrap();
        assert!(!mask.is_blocked(Point::new(1, 1)));
        mask.set(Point::new(1, 1), true);
        assert!(mask.is_blocked(Point::new(1, 1)));
        assert_eq!(mask.count_blocked(), 1);
        // Out of bounds reads as blocked, writes are dropped.
        assert!(mask.is_blocked(Point::new(3, 0)));
        mask.set(Point::new(9, 9), true);
        assert_eq!(mask.count_blocked(), 1);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn mask_round_trip() {
        let mut mask = Mask::new(3, 2).unwrap();
        mask.set(Point::new(2, 1), true);
        let json = serde_json::to_string(&mask).unwrap();
        let back: Mask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
    }
}
