/// Compatibility layer for rayon/sequential execution.
///
/// With the `parallel` feature this re-exports rayon's parallel iterators.
/// Without it, a sequential stand-in exposes the same `into_par_iter` and
/// `map_init` calls used by the row loops, so the pixel code is written once.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }

    /// Sequential stand-in for rayon's `map_init`: one scratch state for the
    /// whole loop instead of one per worker split.
    pub trait MapInit: Iterator + Sized {
        fn map_init<T, INIT, F, R>(self, init: INIT, map_op: F) -> impl Iterator<Item = R>
        where
            INIT: Fn() -> T,
            F: Fn(&mut T, Self::Item) -> R,
        {
            let mut state = init();
            self.map(move |item| map_op(&mut state, item))
        }
    }

    impl<I: Iterator> MapInit for I {}
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
