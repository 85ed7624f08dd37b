//! TimSort over an [`IndexableList`].
//!
//! The engine identifies strictly descending and non-descending subsequences, which are called
//! natural runs. Strictly descending runs are reversed in place, and runs shorter than the minimum
//! run length are padded to it with insertion sort. Every run is pushed onto a stack of pending
//! runs, after which adjacent runs are merged while the three topmost runs `x`, `y`, `z` (`z` being
//! the most recent one) violate
//!
//! 1. `x.len > y.len + z.len`
//! 2. `y.len > z.len`
//!
//! Once the input is consumed the remaining runs are merged pairwise from the top until a single
//! run spans the whole list.
//!
//! All element access goes through the list's positional interface, so every read and write costs
//! a walk from the nearer end of the list.
//!
//! # Merge modes
//!
//! Two adjacent runs are merged into a scratch buffer and written back in place. If either run is
//! longer than `min_merge` the galloping routine is used for the whole merge, otherwise the plain
//! two-pointer routine. The choice is made up front by run length. It is not switched on mid-merge
//! by an observed winning streak as classic TimSort does.

use std::cmp;

use crate::config::TimSortConfig;
use crate::error::{CapacityExceededError, SortError};
use crate::list::IndexableList;
use crate::run::{Run, RunStack};

/// Minimum run length for a list of `len` elements.
///
/// Halves `len` until it drops below `min_merge`, rounding up if any shifted-out bit was set. For
/// `min_merge == 32` the result lies in `16..32` once `len >= 32`, and is `len` itself below that.
pub fn compute_min_run(mut len: usize, min_merge: usize) -> usize {
    debug_assert!(min_merge > 0);

    let mut r = 0;
    while len >= min_merge {
        r |= len & 1;
        len >>= 1;
    }
    len + r
}

/// How two adjacent runs are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Two-pointer merge, one element per comparison.
    Plain,
    /// Two-pointer merge with bulk copies after a winning streak.
    Galloping,
}

/// Sort engine bound to one list for its whole lifetime.
pub struct TimSort<'a, T> {
    list: &'a mut IndexableList<T>,
    scratch: Vec<T>,
    runs: RunStack,
    config: TimSortConfig,
}

impl<'a, T> TimSort<'a, T>
where
    T: Ord + Clone,
{
    pub fn new(list: &'a mut IndexableList<T>) -> Self {
        Self::with_config(list, TimSortConfig::default())
    }

    pub fn with_config(list: &'a mut IndexableList<T>, config: TimSortConfig) -> Self {
        Self {
            list,
            scratch: Vec::new(),
            runs: RunStack::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TimSortConfig {
        &self.config
    }

    #[inline]
    pub fn max_supported_size(&self) -> usize {
        self.config.max_size()
    }

    #[inline]
    pub fn is_size_valid(&self, len: usize) -> bool {
        self.config.is_size_valid(len)
    }

    /// Minimum run length for the bound list.
    #[inline]
    pub fn min_run(&self) -> usize {
        compute_min_run(self.list.len(), self.config.min_merge())
    }

    /// Sorts the bound list in ascending order. Equal elements keep their relative order.
    ///
    /// Returns the number of elements sorted. Lists longer than the configured `max_size` are
    /// left untouched and reported as [`SortError::CapacityExceeded`].
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.list.len()))]
    pub fn sort(&mut self) -> Result<usize, SortError> {
        let len = self.list.len();
        if len <= 1 {
            return Ok(len);
        }

        if !self.is_size_valid(len) {
            let max = self.config.max_size();
            tracing::warn!(len, max, "Refusing to sort, list exceeds the size limit");
            return Err(CapacityExceededError::new(len, max).into());
        }

        self.runs.clear();

        let mut run_count = 0;
        let mut current = 0;
        while current < len {
            let run = self.find_next_run(current);
            self.push_run(run);
            run_count += 1;

            current = run.end + 1;
        }

        self.force_merge();

        // Finally, exactly one run must remain in the stack.
        debug_assert!(self.runs.len() == 1 && self.runs.top() == Some(Run::new(0, len - 1)));
        self.scratch = Vec::new();

        tracing::info!(len, runs = run_count, "TimSort finished");
        Ok(len)
    }

    /// Detects the run beginning at `start` and returns it ascending.
    ///
    /// A strictly descending run is reversed in place. A run shorter than the minimum run length
    /// is extended up to it (or the end of the list) and insertion sorted.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid index.
    pub fn find_next_run(&mut self, start: usize) -> Run {
        let len = self.list.len();
        assert!(
            start < len,
            "run start {} out of range for list of length {}",
            start,
            len
        );

        if start == len - 1 {
            return Run::new(start, start);
        }

        let mut end = start;
        let descending = self.list[start] > self.list[start + 1];
        if descending {
            while end + 1 < len && self.list[end] > self.list[end + 1] {
                end += 1;
            }
            self.reverse_segment(start, end);
        } else {
            while end + 1 < len && self.list[end] <= self.list[end + 1] {
                end += 1;
            }
        }

        let natural_len = end - start + 1;
        let min_run = self.min_run();
        let padded = natural_len < min_run;
        if padded {
            end = cmp::min(start + min_run - 1, len - 1);
            self.insertion_sort(start, end);
        }

        tracing::debug!(start, end, natural_len, descending, padded, "Found run");
        Run::new(start, end)
    }

    /// Stable insertion sort of `start..=end`.
    fn insertion_sort(&mut self, start: usize, end: usize) {
        for i in start + 1..=end {
            let key = self.list[i].clone();
            let mut hole = i;
            while hole > start && self.list[hole - 1] > key {
                let shifted = self.list[hole - 1].clone();
                self.list[hole] = shifted;
                hole -= 1;
            }
            self.list[hole] = key;
        }
    }

    fn reverse_segment(&mut self, mut left: usize, mut right: usize) {
        while left < right {
            if let Err(err) = self.list.swap(left, right) {
                panic!("run reversal left the list: {}", err);
            }
            left += 1;
            right -= 1;
        }
    }

    /// Pushes an ascending run onto the pending stack and restores the run length invariants.
    ///
    /// `run` must start right after the last pending run.
    #[doc(hidden)]
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
        self.collapse();
    }

    /// Runs waiting to be merged, bottom first.
    #[doc(hidden)]
    pub fn runs(&self) -> &RunStack {
        &self.runs
    }

    /// Mode [`merge_runs`](Self::merge_runs) uses for the two runs: galloping as soon as either
    /// run is longer than `min_merge`.
    pub fn merge_mode(&self, left: &Run, right: &Run) -> MergeMode {
        let min_merge = self.config.min_merge();
        if left.len > min_merge || right.len > min_merge {
            MergeMode::Galloping
        } else {
            MergeMode::Plain
        }
    }

    fn should_merge(&self) -> bool {
        match self.runs.top_three() {
            Some((x, y, z)) => x.len <= y.len + z.len || y.len <= z.len,
            None => false,
        }
    }

    /// Merges adjacent runs on the stack until the run length invariants hold again.
    ///
    /// Merging `x` with `y` is preferred whenever `x` is not longer than `z`.
    fn collapse(&mut self) {
        while self.should_merge() {
            let z = self.runs.pop();
            let y = self.runs.pop();
            let x = self.runs.pop();

            if x.len <= z.len {
                let merged = self.merge_runs(x, y);
                self.runs.push(merged);
                self.runs.push(z);
            } else if y.len <= z.len {
                let merged = self.merge_runs(y, z);
                self.runs.push(x);
                self.runs.push(merged);
            } else {
                self.runs.push(x);
                self.runs.push(y);
                self.runs.push(z);
                break;
            }
        }
    }

    /// Merges the pending runs pairwise, topmost pair first, until at most one is left.
    #[doc(hidden)]
    pub fn force_merge(&mut self) {
        while self.runs.len() > 1 {
            let right = self.runs.pop();
            let left = self.runs.pop();
            let merged = self.merge_runs(left, right);
            self.runs.push(merged);
        }
    }

    /// Merges `left` and the run directly following it, and returns the combined run.
    fn merge_runs(&mut self, left: Run, right: Run) -> Run {
        let mode = self.merge_mode(&left, &right);
        let gallop = mode == MergeMode::Galloping;
        tracing::debug!(
            left_start = left.start,
            left_len = left.len,
            right_len = right.len,
            gallop,
            "Merging runs"
        );

        self.scratch.clear();
        self.scratch.reserve(left.len + right.len);
        match mode {
            MergeMode::Galloping => self.merge_galloping(left, right),
            MergeMode::Plain => self.merge_plain(left, right),
        }
        self.write_back(left.start);

        Run::merged(left, right)
    }

    fn merge_plain(&mut self, left: Run, right: Run) {
        let mut l = left.start;
        let mut r = right.start;

        while l <= left.end && r <= right.end {
            // On ties the left element goes first, which is what keeps the sort stable.
            if self.list[l] <= self.list[r] {
                self.scratch.push(self.list[l].clone());
                l += 1;
            } else {
                self.scratch.push(self.list[r].clone());
                r += 1;
            }
        }

        self.copy_to_scratch(l, left.end + 1);
        self.copy_to_scratch(r, right.end + 1);
    }

    /// Two-pointer merge that switches to a bulk copy after `gallop_threshold` consecutive wins
    /// of one side.
    ///
    /// After a left streak, every right element strictly less than the current left element is
    /// copied in one go, followed by that left element. After a right streak, every left element
    /// less than or equal to the current right element is copied, followed by that right element.
    /// Both win counters are reset after each bulk copy.
    fn merge_galloping(&mut self, left: Run, right: Run) {
        let threshold = self.config.gallop_threshold();
        let mut l = left.start;
        let mut r = right.start;
        let mut left_wins = 0;
        let mut right_wins = 0;

        while l <= left.end && r <= right.end {
            if left_wins >= threshold {
                let key = self.list[l].clone();
                let count = self.gallop_left(r, right.end, &key);
                self.copy_to_scratch(r, r + count);
                r += count;

                self.scratch.push(key);
                l += 1;
                left_wins = 0;
                right_wins = 0;
            } else if right_wins >= threshold {
                let key = self.list[r].clone();
                let count = self.gallop_right(l, left.end, &key);
                self.copy_to_scratch(l, l + count);
                l += count;

                self.scratch.push(key);
                r += 1;
                left_wins = 0;
                right_wins = 0;
            } else if self.list[l] <= self.list[r] {
                self.scratch.push(self.list[l].clone());
                l += 1;
                left_wins += 1;
                right_wins = 0;
            } else {
                self.scratch.push(self.list[r].clone());
                r += 1;
                right_wins += 1;
                left_wins = 0;
            }
        }

        self.copy_to_scratch(l, left.end + 1);
        self.copy_to_scratch(r, right.end + 1);
    }

    /// Counts the leading elements of `start..=end` that are strictly less than `key`.
    ///
    /// This is a linear scan, not an exponential search.
    fn gallop_left(&self, start: usize, end: usize, key: &T) -> usize {
        (start..=end).take_while(|&i| self.list[i] < *key).count()
    }

    /// Counts the leading elements of `start..=end` that are less than or equal to `key`.
    fn gallop_right(&self, start: usize, end: usize, key: &T) -> usize {
        (start..=end).take_while(|&i| self.list[i] <= *key).count()
    }

    /// Appends the elements at `from..to` to the scratch buffer.
    fn copy_to_scratch(&mut self, from: usize, to: usize) {
        for i in from..to {
            self.scratch.push(self.list[i].clone());
        }
    }

    fn write_back(&mut self, dest: usize) {
        for (offset, value) in self.scratch.drain(..).enumerate() {
            self.list[dest + offset] = value;
        }
    }
}
