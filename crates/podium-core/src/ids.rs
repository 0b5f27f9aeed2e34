//! Surrogate id allocation.

/// Monotonic counter seeded once from the ids already present.
///
/// Every id it hands out is greater than every numeric id seen at seed time,
/// and distinct from every other id it hands out.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u128,
}

impl IdAllocator {
    /// Scans the existing ids and starts at `max + 1`. Ids that are not
    /// numeric or do not fit in a `u64` are ignored; with none left the first
    /// id is `1`.
    ///
    /// ```
    /// use podium_core::IdAllocator;
    ///
    /// let mut ids = IdAllocator::seed(["7", "x", " 12 ", ""]);
    /// assert_eq!(ids.allocate(), "13");
    /// assert_eq!(ids.allocate(), "14");
    /// ```
    pub fn seed<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max = existing
            .into_iter()
            .filter_map(|value| value.trim().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: u128::from(max) + 1,
        }
    }

    /// Issues the next id.
    pub fn allocate(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
