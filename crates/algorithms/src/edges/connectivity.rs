//! Restrict a window's similar cells to the 8-connected island of the nucleus
//!
//! Both edge passes optionally drop similar cells that are not reachable
//! from the nucleus, so a separate patch of matching brightness elsewhere in
//! the kernel does not inflate the USAN area. The fill works on a flat
//! row-major window and reuses caller-owned buffers, so the per-pixel path
//! never allocates.

use ndarray::{Array2, ArrayView2};
use susanedge_core::raster::QUEEN_OFFSETS;

/// Mark in `island` every `similar` cell 8-connected to `seed`.
///
/// `similar` and `island` are `width × width` row-major windows. `island` is
/// overwritten; if the seed itself is not similar the island is empty.
pub(crate) fn flood_island(
    similar: &[bool],
    width: usize,
    seed: usize,
    island: &mut [bool],
    stack: &mut Vec<usize>,
) {
    island.fill(false);
    stack.clear();

    if !similar[seed] {
        return;
    }

    island[seed] = true;
    stack.push(seed);

    while let Some(idx) = stack.pop() {
        let (row, col) = ((idx / width) as isize, (idx % width) as isize);

        for &(dr, dc) in &QUEEN_OFFSETS {
            let nr = row + dr;
            let nc = col + dc;
            if nr < 0 || nc < 0 || nr >= width as isize || nc >= width as isize {
                continue;
            }
            let n = nr as usize * width + nc as usize;
            if similar[n] && !island[n] {
                island[n] = true;
                stack.push(n);
            }
        }
    }
}

/// Return the cells of a square boolean `mask` that are 8-connected to
/// `seed` (given as `(row, col)`); all other cells are cleared.
///
/// # Panics
/// If `mask` is not square or `seed` lies outside it.
pub fn connected_component(mask: ArrayView2<'_, bool>, seed: (usize, usize)) -> Array2<bool> {
    let (rows, cols) = mask.dim();
    assert_eq!(rows, cols, "connectivity window must be square");
    assert!(seed.0 < rows && seed.1 < cols, "seed outside window");

    let similar: Vec<bool> = mask.iter().copied().collect();
    let mut island = vec![false; similar.len()];
    let mut stack = Vec::new();
    flood_island(&similar, cols, seed.0 * cols + seed.1, &mut island, &mut stack);

    Array2::from_shape_fn((rows, cols), |(r, c)| island[r * cols + c])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_diagonal_counts_as_connected() {
        let mask = array![
            [true, false, false],
            [false, true, false],
            [false, false, true],
        ];
        let island = connected_component(mask.view(), (1, 1));
        assert_eq!(island, mask);
    }

    #[test]
    fn test_detached_patch_removed() {
        let mask = array![
            [true, true, false, false, false],
            [false, false, false, false, false],
            [false, false, true, true, false],
            [false, false, false, true, false],
            [false, false, false, false, false],
        ];
        let island = connected_component(mask.view(), (2, 2));
        let expected = array![
            [false, false, false, false, false],
            [false, false, false, false, false],
            [false, false, true, true, false],
            [false, false, false, true, false],
            [false, false, false, false, false],
        ];
        assert_eq!(island, expected);
    }

    #[test]
    fn test_unset_seed_gives_empty_island() {
        let mask = array![[true, true, true], [true, false, true], [true, true, true]];
        let island = connected_component(mask.view(), (1, 1));
        assert!(island.iter().all(|&c| !c));
    }

    #[test]
    fn test_buffers_reused_between_calls() {
        let mut island = vec![true; 9];
        let mut stack = vec![4, 4, 4];
        let similar = [false, false, false, false, true, false, false, false, true];
        flood_island(&similar, 3, 4, &mut island, &mut stack);
        assert_eq!(island, similar.to_vec());
        assert!(stack.is_empty());
    }
}
