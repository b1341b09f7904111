//! Bidirectional middle-snake search.
//!
//! Runs Myers' greedy search forward from `(0, 0)` and backward from
//! `(m, n)` at the same time, one edit per half-step, until the two
//! furthest-reaching frontiers overlap on a diagonal. The snake found there
//! lies on some shortest edit script and splits the problem in two.
//!
//! Complexity is O(D·(m+n)) time and O(m+n) space.

use tracing::error;

use super::frontier::Frontier;
use crate::diff::{DiffError, MiddleSnake, Point, Snake};

/// Finds the edit distance between `old` and `new` and a maximal diagonal run
/// that a shortest edit script passes through.
///
/// When both frontier neighbours of a diagonal reach equally far, the search
/// steps from the left neighbour (a deletion). For an odd length difference
/// the first overlapping diagonal of the forward sweep wins; for an even one
/// the backward sweep prefers a diagonal where both frontiers stop on the same
/// point, then the first overlap.
///
/// # Errors
///
/// Returns [`DiffError::MiddleSnakeNotFound`] if the frontiers never meet,
/// which only happens when `T`'s equality is not an equivalence relation.
pub fn find_middle_snake<T: Eq>(old: &[T], new: &[T]) -> Result<MiddleSnake, DiffError> {
    let (m, n) = (old.len() as isize, new.len() as isize);
    let delta = m - n;
    let odd = delta % 2 != 0;
    let max_rounds = (m + n + 1) / 2;

    let mut forward = Frontier::new(old.len(), new.len());
    let mut backward = Frontier::new(old.len(), new.len());
    forward.set(1, 0);
    backward.set(delta - 1, m);

    for d in 0..=max_rounds {
        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d || (k != d && forward.get(k - 1) < forward.get(k + 1)) {
                forward.get(k + 1)
            } else {
                forward.get(k - 1) + 1
            };
            let mut y = x - k;
            let start = (x, y);
            while x < m && y < n && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            forward.set(k, x);

            if odd && (delta - (d - 1)..=delta + (d - 1)).contains(&k) && x >= backward.get(k) {
                return Ok(widen(old, new, 2 * d - 1, start, (x, y)));
            }
        }

        let mut overlap = None;
        for c in (-d..=d).step_by(2) {
            let k = c + delta;
            let mut x = if c == d || (c != -d && backward.get(k + 1) > backward.get(k - 1)) {
                backward.get(k - 1)
            } else {
                backward.get(k + 1) - 1
            };
            let mut y = x - k;
            let end = (x, y);
            while x > 0 && y > 0 && old[(x - 1) as usize] == new[(y - 1) as usize] {
                x -= 1;
                y -= 1;
            }
            backward.set(k, x);

            if !odd && (-d..=d).contains(&k) {
                let reach = forward.get(k);
                if reach == x {
                    return Ok(widen(old, new, 2 * d, (x, y), end));
                }
                if reach > x && overlap.is_none() {
                    overlap = Some(((x, y), end));
                }
            }
        }
        if let Some((start, end)) = overlap {
            return Ok(widen(old, new, 2 * d, start, end));
        }
    }

    error!(
        "Middle snake search exhausted without overlap (old: {}, new: {})",
        old.len(),
        new.len()
    );
    Err(DiffError::MiddleSnakeNotFound {
        old_len: old.len(),
        new_len: new.len(),
    })
}

/// Stretches the witness run over every adjacent match so it is maximal.
fn widen<T: Eq>(
    old: &[T],
    new: &[T],
    edit_distance: isize,
    start: (isize, isize),
    end: (isize, isize),
) -> MiddleSnake {
    let (mut start_row, mut start_col) = (start.0 as usize, start.1 as usize);
    let (mut end_row, mut end_col) = (end.0 as usize, end.1 as usize);
    while start_row > 0 && start_col > 0 && old[start_row - 1] == new[start_col - 1] {
        start_row -= 1;
        start_col -= 1;
    }
    while end_row < old.len() && end_col < new.len() && old[end_row] == new[end_col] {
        end_row += 1;
        end_col += 1;
    }
    MiddleSnake {
        edit_distance: edit_distance as usize,
        snake: Snake::new(
            Point::new(start_row, start_col),
            Point::new(end_row, end_col),
        ),
    }
}
