//! Running totals tracked across the engine's lifetime (spec §4.7, §8).

/// Grounded on `otter_sat::context::counters::Counters`: a small plain struct
/// of running totals, incremented in the control loop rather than derived on
/// demand.
#[derive(Debug, Default, Clone, Copy)]
pub struct Counters {
    /// Number of working cycles completed (spec §4.7 step 5).
    pub cycles: u64,
    /// Number of tasks that reached the main step (spec §4.7 step 2).
    pub tasks_processed: u64,
}
