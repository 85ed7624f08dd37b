/// A contiguous, non-decreasing span `start..=end` of the list being sorted.
///
/// Runs only describe index ranges, they never own elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl Run {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            len: end - start + 1,
        }
    }

    /// The run covering `left` followed directly by `right`.
    ///
    /// # Panics
    ///
    /// Panics if `right` does not begin right after `left` ends.
    #[inline]
    pub fn merged(left: Run, right: Run) -> Self {
        assert_eq!(left.end + 1, right.start, "merged runs must be adjacent");
        Self {
            start: left.start,
            end: right.end,
            len: left.len + right.len,
        }
    }
}

/// Pending runs in discovery order, the most recent one on top.
#[derive(Debug, Clone, Default)]
pub struct RunStack {
    runs: Vec<Run>,
}

impl RunStack {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Removes the top run.
    ///
    /// # Panics
    ///
    /// Popping an empty stack means the merge bookkeeping is broken, which is not recoverable.
    #[inline]
    pub fn pop(&mut self) -> Run {
        match self.runs.pop() {
            Some(run) => run,
            None => panic!("run stack underflow"),
        }
    }

    #[inline]
    pub fn top(&self) -> Option<Run> {
        self.runs.last().copied()
    }

    /// The three topmost runs as `(x, y, z)` with `z` the most recent one.
    #[inline]
    pub fn top_three(&self) -> Option<(Run, Run, Run)> {
        match self.runs.as_slice() {
            [.., x, y, z] => Some((*x, *y, *z)),
            _ => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn as_slice(&self) -> &[Run] {
        &self.runs
    }
}
