//! Display ordering
//!
//! Fisher-Yates shuffling over any `rand::Rng`. The display order is a
//! permutation of canonical indices, so it never affects which entry a tile
//! opens.

use rand::Rng;

/// Uniformly random permutation of `items`.
///
/// Walks from the last index down to 1 and swaps with a uniformly chosen
/// index in `[0, i]`. The input is left untouched.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Rendering order as a permutation of canonical indices
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayOrder {
    indices: Vec<usize>,
}

impl DisplayOrder {
    /// Fetch order
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    /// Random order over `len` entries
    pub fn shuffled<R: Rng>(len: usize, rng: &mut R) -> Self {
        let identity: Vec<usize> = (0..len).collect();
        Self {
            indices: shuffle(&identity, rng),
        }
    }

    /// Canonical indices in display order
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of positions
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if there is nothing to display
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Canonical index shown at a visual position
    #[inline]
    pub fn canonical_at(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }
}
