use serde::Serialize;

/// The `Tracker` struct is a simple collection of named counters used for collecting data points
/// on a simulation run. Hit and fault counts are enough to derive every statistic the summary
/// card displays.
#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize)]
pub struct Tracker {
    pub hits: usize,
    pub faults: usize,
}

impl Tracker {
    /// Create a new instance of the `Tracker` struct with all counters initialized to zero.
    pub fn new() -> Self {
        Self { hits: 0, faults: 0 }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    /// Number of references seen so far.
    pub fn accesses(&self) -> usize {
        self.hits + self.faults
    }

    /// Percentage of references that were hits, rounded to the nearest integer with halves
    /// rounding up. Zero accesses report zero.
    pub fn hit_ratio_percent(&self) -> u8 {
        let total = self.accesses();
        if total == 0 {
            return 0;
        }
        ((200 * self.hits + total) / (2 * total)) as u8
    }
}

impl std::fmt::Display for Tracker {
    /// Display format specification for the `Tracker` struct implemented to simplify the process
    /// of outputting statistics to the terminal.
    ///
    /// # Arguments
    ///
    /// * `f` - A mutable reference to a standard library formatter instance. For most use cases,
    /// this is provided automatically as this method is not meant to be called directly.
    ///
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total Pages: {}  Hits: {}  Faults: {}  Hit Ratio: {}%",
            self.accesses(),
            self.hits,
            self.faults,
            self.hit_ratio_percent(),
        )
    }
}
