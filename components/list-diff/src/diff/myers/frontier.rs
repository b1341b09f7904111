//! Furthest-reaching frontiers indexed by diagonal.

/// Maps a diagonal `k` to the furthest `x` reached on it.
///
/// Diagonals may be negative, so values live at `k + offset`. The offset
/// covers every diagonal either sweep can read: `ceil((m + n) / 2)` rounds on
/// each side of the centre, shifted by `|m - n|` for the backward sweep.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    values: Vec<isize>,
    offset: isize,
}

impl Frontier {
    /// Creates a zeroed frontier for sequences of the given lengths.
    pub(crate) fn new(old_len: usize, new_len: usize) -> Self {
        let max_rounds = (old_len + new_len).div_ceil(2);
        let offset = (max_rounds + old_len.abs_diff(new_len) + 1) as isize;
        Self {
            values: vec![0; 2 * offset as usize + 1],
            offset,
        }
    }

    /// Returns the furthest `x` recorded on diagonal `k`.
    pub(crate) fn get(&self, k: isize) -> isize {
        self.values[(k + self.offset) as usize]
    }

    /// Records `x` as the furthest point on diagonal `k`.
    pub(crate) fn set(&mut self, k: isize, x: isize) {
        self.values[(k + self.offset) as usize] = x;
    }
}
