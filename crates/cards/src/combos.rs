// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-subsets enumeration.

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // Multiplying before dividing keeps every intermediate product an
    // exact binomial coefficient.
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Creates a lazy iterator over all k-subsets of `items`.
///
/// Subsets preserve the relative input order of their elements and are
/// produced in lexicographic index order, `nck(items.len(), k)` in total.
/// The k=0 case yields a single empty subset, k=len the single full subset.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        done: k > items.len(),
    }
}

/// Iterator over the k-subsets of a slice, see [combinations].
#[derive(Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self.indices.iter().map(|&i| self.items[i]).collect();

        // Advance to the next index combination, marking the iterator done
        // once the last index combination has been emitted.
        let (n, k) = (self.items.len(), self.indices.len());
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }

            i -= 1;
            if self.indices[i] != i + n - k {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // Upper bound only, counting the emitted prefix is not worth it.
            let count = nck(self.items.len(), self.indices.len());
            (0, Some(count))
        }
    }
}
