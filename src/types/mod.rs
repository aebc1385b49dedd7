//! Shared small types used throughout the library.

pub mod err;

/// Occurrence time of an event, measured in cycles since engine construction.
///
/// `None` means the sentence is eternal (holds regardless of cycle number).
pub type OccurrenceTime = Option<u64>;

/// The unique, monotonically issued identifier carried by every [stamp](crate::sentence::Stamp).
pub type StampId = u64;
