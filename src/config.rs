/// Largest list the engine agrees to sort unless configured otherwise.
pub const DEFAULT_MAX_SIZE: usize = 50_000;

/// Runs longer than this are merged in galloping mode. Also the halving threshold of the minimum
/// run length computation.
pub const DEFAULT_MIN_MERGE: usize = 32;

/// The number of consecutive wins of one side before a gallop step is taken.
pub const DEFAULT_GALLOP_THRESHOLD: usize = 7;

/// Tunables of a [`TimSort`](crate::timsort::TimSort) instance.
///
/// ```ignore
/// let config = TimSortConfig::default().with_max_size(1_000);
/// let mut sorter = TimSort::with_config(&mut list, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimSortConfig {
    max_size: usize,
    min_merge: usize,
    gallop_threshold: usize,
}

impl TimSortConfig {
    pub const fn new() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            min_merge: DEFAULT_MIN_MERGE,
            gallop_threshold: DEFAULT_GALLOP_THRESHOLD,
        }
    }

    /// Sets the capacity ceiling. Lists longer than `max_size` are refused by `sort`.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// # Panics
    ///
    /// Panics if `min_merge` is zero.
    pub fn with_min_merge(mut self, min_merge: usize) -> Self {
        assert!(min_merge > 0, "min_merge must be positive");
        self.min_merge = min_merge;
        self
    }

    pub fn with_gallop_threshold(mut self, gallop_threshold: usize) -> Self {
        self.gallop_threshold = gallop_threshold;
        self
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    pub fn min_merge(&self) -> usize {
        self.min_merge
    }

    #[inline]
    pub fn gallop_threshold(&self) -> usize {
        self.gallop_threshold
    }

    #[inline]
    pub fn is_size_valid(&self, len: usize) -> bool {
        len <= self.max_size
    }
}

impl Default for TimSortConfig {
    fn default() -> Self {
        Self::new()
    }
}
