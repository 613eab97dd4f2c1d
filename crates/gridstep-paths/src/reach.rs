//! Breadth-first reachability between the mask's start and goal corners.

use std::collections::VecDeque;

use gridstep_core::Mask;

/// Whether any 4-connected path of free cells links the start corner to
/// the goal corner of `mask`.
///
/// Returns `false` immediately if either corner is blocked. Each cell is
/// visited at most once; only the boolean result is part of the contract,
/// not the traversal order.
pub fn path_exists(mask: &Mask) -> bool {
    let start = mask.start();
    let goal = mask.goal();
    if mask.is_blocked(start) || mask.is_blocked(goal) {
        return false;
    }

    let mut visited = vec![false; mask.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    // Start index is always 0, but go through the mask for symmetry.
    let si = match mask.idx(start) {
        Some(i) => i,
        None => return false,
    };
    visited[si] = true;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let cp = mask.point(ci);
        if cp == goal {
            return true;
        }
        for np in cp.neighbors_4() {
            let Some(ni) = mask.idx(np) else {
                continue;
            };
            if visited[ni] || mask.is_blocked(np) {
                continue;
            }
            visited[ni] = true;
            queue.push_back(ni);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstep_core::Point;

    #[test]
    fn open_grid_is_reachable() {
        let mask = Mask::new(5, 5).unwrap();
        assert!(path_exists(&mask));
    }

    #[test]
    fn single_cell_grid() {
        let mask = Mask::new(1, 1).unwrap();
        assert!(path_exists(&mask));
    }

    #[test]
    fn blocked_start_or_goal_fails_fast() {
        let mut mask = Mask::new(4, 4).unwrap();
        mask.set(Point::new(0, 0), true);
        assert!(!path_exists(&mask));

        let mut mask = Mask::new(4, 4).unwrap();
        mask.set(Point::new(3, 3), true);
        assert!(!path_exists(&mask));
    }

    #[test]
    fn solid_wall_disconnects() {
        let mut mask = Mask::new(5, 5).unwrap();
        for x in 0..5 {
            mask.set(Point::new(x, 1), true);
        }
        assert!(!path_exists(&mask));
    }

    #[test]
    fn wall_with_gap_connects() {
        let mut mask = Mask::new(5, 5).unwrap();
        for x in 0..4 {
            mask.set(Point::new(x, 1), true);
        }
        assert!(path_exists(&mask));
    }
}
