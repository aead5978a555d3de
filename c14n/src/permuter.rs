//! I define [`Permuter`], which enumerates all the orderings of a list.

/// Iterate over every permutation of a list, exactly once each.
///
/// The list is sorted first,
/// and permutations are then produced with the
/// [Steinhaus-Johnson-Trotter algorithm](https://en.wikipedia.org/wiki/Steinhaus%E2%80%93Johnson%E2%80%93Trotter_algorithm),
/// so the enumeration order only depends on the items themselves,
/// and matches the order used by other RDFC-1.0 implementations.
///
/// An empty or singleton list has exactly one permutation: itself.
#[derive(Clone, Debug)]
pub struct Permuter<T> {
    items: Vec<T>,
    // direction of the item at the same position (true = left)
    left: Vec<bool>,
    done: bool,
}

impl<T: Ord + Clone> Permuter<T> {
    /// Prepare the enumeration of the permutations of `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort();
        let left = vec![true; items.len()];
        Permuter {
            items,
            left,
            done: false,
        }
    }

    /// Whether [`next`](Iterator::next) will yield another permutation.
    pub fn has_next(&self) -> bool {
        !self.done
    }

    fn is_mobile(&self, i: usize) -> bool {
        if self.left[i] {
            i > 0 && self.items[i] > self.items[i - 1]
        } else {
            i + 1 < self.items.len() && self.items[i] > self.items[i + 1]
        }
    }

    fn advance(&mut self) {
        let mut largest: Option<usize> = None;
        for i in 0..self.items.len() {
            if self.is_mobile(i) && largest.map_or(true, |k| self.items[i] > self.items[k]) {
                largest = Some(i);
            }
        }
        let Some(k) = largest else {
            self.done = true;
            return;
        };
        let to = if self.left[k] { k - 1 } else { k + 1 };
        self.items.swap(k, to);
        self.left.swap(k, to);
        for i in 0..self.items.len() {
            if self.items[i] > self.items[to] {
                self.left[i] = !self.left[i];
            }
        }
    }
}

impl<T: Ord + Clone> Iterator for Permuter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let current = self.items.clone();
        self.advance();
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn check_empty() {
        let mut p = Permuter::<i32>::new([]);
        assert!(p.has_next());
        assert_eq!(p.next(), Some(vec![]));
        assert!(!p.has_next());
        assert_eq!(p.next(), None);
    }

    #[test]
    fn check_1() {
        let got: Vec<_> = Permuter::new([1]).collect();
        assert_eq!(got, [vec![1]]);
    }

    #[test]
    fn check_12() {
        let got: Vec<_> = Permuter::new([2, 1]).collect();
        assert_eq!(got, [vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn check_123_order() {
        let got: Vec<_> = Permuter::new([3, 1, 2]).collect();
        assert_eq!(
            got,
            [
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![3, 1, 2],
                vec![3, 2, 1],
                vec![2, 3, 1],
                vec![2, 1, 3],
            ]
        );
    }

    #[test]
    fn check_1234() {
        let got: Vec<_> = Permuter::new([4, 3, 2, 1]).collect();
        assert_eq!(got.len(), 24);
        assert_eq!(got[0], [1, 2, 3, 4]);
        assert_eq!(got[1], [1, 2, 4, 3]);
        assert_eq!(got[23], [2, 1, 3, 4]);
        let distinct: HashSet<_> = got.into_iter().collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn consecutive_permutations_differ_by_one_swap() {
        let got: Vec<_> = Permuter::new([1, 2, 3, 4]).collect();
        for pair in got.windows(2) {
            let diff = pair[0].iter().zip(&pair[1]).filter(|(a, b)| a != b).count();
            assert_eq!(diff, 2, "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn check_12345() {
        let distinct: HashSet<Vec<i32>> = Permuter::new([1, 2, 3, 4, 5]).collect();
        assert_eq!(distinct.len(), 5 * 4 * 3 * 2);
    }

    #[test]
    fn order_does_not_depend_on_input_order() {
        let p1: Vec<_> = Permuter::new(["b", "c", "a"]).collect();
        let p2: Vec<_> = Permuter::new(["c", "a", "b"]).collect();
        assert_eq!(p1, p2);
    }
}
