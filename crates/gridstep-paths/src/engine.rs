//! The stepped A* search engine.
//!
//! [`AstarSearch`] runs A* one expansion at a time: the caller owns the
//! pace and can inspect the full per-cell state between steps. The open
//! set is a binary heap keyed by `(f, h, seq)` with lazy deletion, so a
//! step costs O(log n) instead of a linear rescan, while preserving the
//! tie-break contract: lower `h` wins among equal `f`, and remaining ties
//! go to the earliest-pushed entry.

use std::collections::BinaryHeap;

use gridstep_core::{Mask, Point};

use crate::distance::manhattan;

/// Sentinel cost meaning "not reached" (also returned by the cost
/// observers for out-of-bounds points).
pub const UNREACHABLE: i32 = i32::MAX;

/// Which of the three search sets a cell currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Never discovered.
    #[default]
    Unvisited,
    /// Discovered but not yet finalized.
    Open,
    /// Expanded; its `g` value is final and optimal.
    Closed,
}

/// The engine's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Still running; call [`AstarSearch::step`] again.
    Searching,
    /// Terminal: the goal was expanded and a shortest path reconstructed.
    Succeeded,
    /// Terminal: the open set emptied without reaching the goal.
    Exhausted,
}

impl SearchStatus {
    /// Whether the search has halted.
    #[inline]
    pub fn is_finished(self) -> bool {
        self != SearchStatus::Searching
    }
}

#[derive(Clone)]
struct Node {
    g: i32,
    h: i32,
    f: i32,
    parent: usize,
    state: CellState,
}

/// Heap entry; min-order on `(f, h, seq)`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    f: i32,
    h: i32,
    seq: u64,
    idx: usize,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// An incremental A* search from the mask's start corner to its goal
/// corner, over 4-connected free cells with uniform step cost 1.
///
/// The engine is single-owner: nothing blocks or yields, and all
/// observers are plain reads. To search a different mask (or the same
/// mask with a wall toggled), construct a new engine.
pub struct AstarSearch {
    mask: Mask,
    nodes: Vec<Node>,
    open: BinaryHeap<OpenRef>,
    seq: u64,
    goal_idx: usize,
    current: Option<usize>,
    iterations: usize,
    status: SearchStatus,
    path: Vec<Point>,
}

impl AstarSearch {
    /// Set up a search over `mask`.
    ///
    /// Heuristic values are computed once here and never change. The
    /// start cell is opened with `g = 0` unless the mask blocks it, in
    /// which case the open set begins empty and the first step exhausts.
    pub fn new(mask: Mask) -> Self {
        let goal = mask.goal();
        let len = mask.len();

        let mut nodes = Vec::with_capacity(len);
        for i in 0..len {
            nodes.push(Node {
                g: UNREACHABLE,
                h: manhattan(mask.point(i), goal),
                f: UNREACHABLE,
                parent: usize::MAX,
                state: CellState::Unvisited,
            });
        }

        let mut open = BinaryHeap::new();
        if !mask.is_blocked(mask.start()) {
            let start = &mut nodes[0];
            start.g = 0;
            start.f = start.h;
            start.state = CellState::Open;
            open.push(OpenRef {
                f: start.f,
                h: start.h,
                seq: 0,
                idx: 0,
            });
        }

        Self {
            goal_idx: len - 1,
            mask,
            nodes,
            open,
            seq: 0,
            current: None,
            iterations: 0,
            status: SearchStatus::Searching,
            path: Vec::new(),
        }
    }

    /// Advance the search by exactly one expansion.
    ///
    /// Once a terminal status is reached this is a no-op that keeps
    /// returning the same status.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_finished() {
            return self.status;
        }

        // Select the open cell with minimal (f, h), skipping heap entries
        // made stale by a later relaxation or an earlier close.
        let ci = loop {
            let Some(entry) = self.open.pop() else {
                self.status = SearchStatus::Exhausted;
                return self.status;
            };
            let node = &self.nodes[entry.idx];
            if node.state == CellState::Open && node.f == entry.f {
                break entry.idx;
            }
        };

        self.nodes[ci].state = CellState::Closed;
        self.current = Some(ci);
        self.iterations += 1;

        if ci == self.goal_idx {
            let path = self.reconstruct();
            self.path = path;
            self.status = SearchStatus::Succeeded;
            return self.status;
        }

        let current_g = self.nodes[ci].g;
        let cp = self.mask.point(ci);
        for np in cp.neighbors_4() {
            let Some(ni) = self.mask.idx(np) else {
                continue;
            };
            if self.mask.is_blocked(np) {
                continue;
            }
            let node = &mut self.nodes[ni];
            if node.state == CellState::Closed {
                continue;
            }
            let tentative = current_g + 1;
            if tentative >= node.g {
                continue;
            }
            node.g = tentative;
            node.f = tentative + node.h;
            node.parent = ci;
            node.state = CellState::Open;
            self.seq += 1;
            self.open.push(OpenRef {
                f: node.f,
                h: node.h,
                seq: self.seq,
                idx: ni,
            });
        }

        self.status
    }

    /// Drive [`step`](Self::step) until the search halts.
    pub fn run(&mut self) -> SearchStatus {
        while !self.status.is_finished() {
            self.step();
        }
        self.status
    }

    fn reconstruct(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = self.goal_idx;
        while ci != usize::MAX {
            path.push(self.mask.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Current lifecycle state.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether the search has halted.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Whether the search halted by expanding the goal.
    #[inline]
    pub fn is_succeeded(&self) -> bool {
        self.status == SearchStatus::Succeeded
    }

    /// The cell expanded by the most recent step, if any.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current.map(|i| self.mask.point(i))
    }

    /// Number of completed expansions.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The obstacle mask being searched.
    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The reconstructed start-to-goal path. Empty unless
    /// [`is_succeeded`](Self::is_succeeded) is true.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Which search set the cell at `p` belongs to. `None` out of bounds.
    pub fn cell_state(&self, p: Point) -> Option<CellState> {
        self.mask.idx(p).map(|i| self.nodes[i].state)
    }

    /// All open cells, in ascending row-major cell order.
    pub fn open_cells(&self) -> Vec<Point> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.state == CellState::Open)
            .map(|(i, _)| self.mask.point(i))
            .collect()
    }

    /// Per-cell closed flags, row-major.
    pub fn closed_mask(&self) -> Vec<bool> {
        self.nodes
            .iter()
            .map(|n| n.state == CellState::Closed)
            .collect()
    }

    /// Best known cost from start to `p`, or [`UNREACHABLE`].
    pub fn g_at(&self, p: Point) -> i32 {
        match self.mask.idx(p) {
            Some(i) => self.nodes[i].g,
            None => UNREACHABLE,
        }
    }

    /// Static heuristic (Manhattan distance to goal) at `p`, or
    /// [`UNREACHABLE`] out of bounds.
    pub fn h_at(&self, p: Point) -> i32 {
        match self.mask.idx(p) {
            Some(i) => self.nodes[i].h,
            None => UNREACHABLE,
        }
    }

    /// Priority `g + h` at `p`, or [`UNREACHABLE`] if never reached.
    pub fn f_at(&self, p: Point) -> i32 {
        match self.mask.idx(p) {
            Some(i) => self.nodes[i].f,
            None => UNREACHABLE,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        let json = serde_json::to_string(&SearchStatus::Exhausted).unwrap();
        let back: SearchStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SearchStatus::Exhausted);
    }
}
