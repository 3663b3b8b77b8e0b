//! The five classic comparison sorts, in the shapes the textbooks give them.
//!
//! Every routine rearranges its slice in place into non-decreasing order and
//! returns nothing. There is deliberately no optimization beyond what each
//! named algorithm prescribes: bubble sort keeps its swapped flag, quick sort
//! keeps its last-element Lomuto pivot, merge sort keeps its copied halves.
//! Only merge sort and insertion sort are stable.
//!
//! Empty and single-element slices are no-ops for all five routines.

/// Bubble sort: adjacent-swap passes until a full pass performs no swap.
///
/// Each pass bubbles the largest remaining element to the end, shrinking the
/// unsorted prefix by one. Worst/average O(n^2); O(n) on sorted input (one
/// clean pass).
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut n = arr.len();
    loop {
        let mut swapped = false;
        for i in 1..n {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                swapped = true;
            }
        }
        n = n.saturating_sub(1);
        if !swapped {
            break;
        }
    }
}

/// Selection sort: swap the minimum of the unsorted suffix into place.
///
/// O(n^2) in every case; the suffix scan never shortcuts, whatever the input
/// order.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        arr.swap(i, min_index);
    }
}

/// Insertion sort: shift each element left past its larger predecessors.
///
/// Stable. Best O(n) on sorted input; worst/average O(n^2).
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Merge sort: halve recursively, then merge by repeated smallest-head
/// comparison.
///
/// Stable: ties take the left-half element first. Always O(n log n), with
/// auxiliary buffers proportional to the slice at every merge level, so not
/// in-place in the strict sense.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    let mut left = arr[..mid].to_vec();
    let mut right = arr[mid..].to_vec();
    merge_sort(&mut left);
    merge_sort(&mut right);
    merge(&left, &right, arr);
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // <= keeps the left-half element on ties, which is what makes the
        // whole sort stable.
        if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quick sort: recursive Lomuto partitioning with the last element as pivot.
///
/// Best/average O(n log n); O(n^2) against sorted or adversarial input, the
/// known cost of the fixed last-element pivot.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (lower, upper) = arr.split_at_mut(pivot);
    quick_sort(lower);
    quick_sort(&mut upper[1..]);
}

/// Single forward scan moving everything <= the last element in front of it,
/// then swapping the pivot into its final slot. Returns the pivot index.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut i = 0;
    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cmp::Ordering;

    type SortFn = fn(&mut [i64]);

    fn all_sorts() -> [(&'static str, SortFn); 5] {
        [
            ("bubble", bubble_sort),
            ("selection", selection_sort),
            ("insertion", insertion_sort),
            ("merge", merge_sort),
            ("quick", quick_sort),
        ]
    }

    /// Sort `input` with `sort` and compare against the std sort of the same
    /// data, which checks sortedness and permutation at once.
    fn check(name: &str, sort: SortFn, input: &[i64]) {
        let mut got = input.to_vec();
        sort(&mut got);
        let mut want = input.to_vec();
        want.sort();
        assert_eq!(got, want, "{name} failed on {input:?}");
    }

    #[test]
    fn sorts_known_vector() {
        for (name, sort) in all_sorts() {
            let mut data = vec![5, 3, 4, 1, 2];
            sort(&mut data);
            assert_eq!(data, vec![1, 2, 3, 4, 5], "{name}");
        }
    }

    #[test]
    fn sorts_common_patterns() {
        let sorted: Vec<i64> = (0..100).collect();
        let reversed: Vec<i64> = (0..100).rev().collect();
        let all_equal = vec![7i64; 50];
        let two = vec![5i64, 3];
        let with_negatives = vec![3i64, -1, 0, -7, 2, 2, -1];

        for (name, sort) in all_sorts() {
            check(name, sort, &sorted);
            check(name, sort, &reversed);
            check(name, sort, &all_equal);
            check(name, sort, &two);
            check(name, sort, &with_negatives);
        }
    }

    #[test]
    fn sorts_seeded_random_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        // Values drawn from a small range so duplicates are guaranteed.
        let mut random: Vec<i64> = (0..500).map(|v| v % 37).collect();
        random.shuffle(&mut rng);

        for (name, sort) in all_sorts() {
            check(name, sort, &random);
        }
    }

    #[test]
    fn empty_and_single_are_untouched() {
        for (name, sort) in all_sorts() {
            let mut empty: Vec<i64> = vec![];
            sort(&mut empty);
            assert!(empty.is_empty(), "{name}");

            let mut single = vec![42i64];
            sort(&mut single);
            assert_eq!(single, vec![42], "{name}");
        }
    }

    #[test]
    fn resorting_sorted_input_is_identity() {
        let sorted: Vec<i64> = (0..200).map(|v| v / 3).collect();
        for (name, sort) in all_sorts() {
            let mut data = sorted.clone();
            sort(&mut data);
            assert_eq!(data, sorted, "{name}");
        }
    }

    /// Element ordered by `key` alone; `id` records the original position so
    /// stability is observable.
    #[derive(Clone, Debug)]
    struct Keyed {
        key: u8,
        id: usize,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn keyed_input() -> Vec<Keyed> {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut keys: Vec<u8> = (0..120).map(|v| (v % 5) as u8).collect();
        keys.shuffle(&mut rng);
        keys.into_iter()
            .enumerate()
            .map(|(id, key)| Keyed { key, id })
            .collect()
    }

    fn assert_stable(sorted: &[Keyed]) {
        assert!(sorted.windows(2).all(|w| w[0].key <= w[1].key));
        // Within each run of equal keys the original ids must still ascend.
        assert!(sorted
            .windows(2)
            .all(|w| w[0].key != w[1].key || w[0].id < w[1].id));
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut data = keyed_input();
        merge_sort(&mut data);
        assert_stable(&data);
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut data = keyed_input();
        insertion_sort(&mut data);
        assert_stable(&data);
    }
}
