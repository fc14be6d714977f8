//! Per-worker scratch for one USAN window

use super::connectivity::flood_island;
use super::kernel::{KernelMask, KernelTap};

/// Reusable buffers for evaluating one nucleus at a time.
///
/// Cells outside the kernel are never written, so they stay zero for the
/// lifetime of the window; every active cell is overwritten by [`load`].
/// One instance serves many pixels of one worker and carries no result
/// from one pixel to the next.
///
/// [`load`]: UsanWindow::load
#[derive(Debug)]
pub(crate) struct UsanWindow {
    weights: Vec<f64>,
    similar: Vec<bool>,
    island: Vec<bool>,
    stack: Vec<usize>,
}

impl UsanWindow {
    pub(crate) fn new(kernel: &KernelMask) -> Self {
        let cells = kernel.width() * kernel.width();
        Self {
            weights: vec![0.0; cells],
            similar: vec![false; cells],
            island: vec![false; cells],
            stack: Vec::with_capacity(cells),
        }
    }

    /// Set every active cell's weight to `weight(tap)`
    #[inline]
    pub(crate) fn load<F>(&mut self, kernel: &KernelMask, mut weight: F)
    where
        F: FnMut(&KernelTap) -> f64,
    {
        for tap in kernel.taps() {
            self.weights[tap.index] = weight(tap);
        }
    }

    /// Zero the weights of cells not 8-connected to the nucleus through
    /// nonzero cells.
    ///
    /// The flood fill only runs when fewer than `area - radius` cells are
    /// nonzero; above that count the window is taken as one island.
    /// Returns whether the fill ran.
    pub(crate) fn restrict_to_nucleus(&mut self, kernel: &KernelMask) -> bool {
        let mut nonzero = 0;
        for tap in kernel.taps() {
            let similar = self.weights[tap.index] != 0.0;
            self.similar[tap.index] = similar;
            nonzero += similar as usize;
        }

        if nonzero >= kernel.connectivity_floor() {
            return false;
        }

        flood_island(
            &self.similar,
            kernel.width(),
            kernel.center_index(),
            &mut self.island,
            &mut self.stack,
        );

        for tap in kernel.taps() {
            if !self.island[tap.index] {
                self.weights[tap.index] = 0.0;
            }
        }
        true
    }

    /// Weight of the cell under `tap`
    #[inline]
    pub(crate) fn weight(&self, tap: &KernelTap) -> f64 {
        self.weights[tap.index]
    }

    /// Sum of the weights over the kernel
    pub(crate) fn area(&self, kernel: &KernelMask) -> f64 {
        kernel.taps().iter().map(|tap| self.weights[tap.index]).sum()
    }
}
