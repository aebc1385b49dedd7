//! The priority-to-weight mapping (spec §4.5).

/// Priority raised to `exponent`: a monotone, non-negative, zero-free (for
/// nonzero priority) function of priority, as the spec allows any such
/// function and this is the simplest one that satisfies it.
pub fn priority_weight(priority: f64, exponent: f64) -> f64 {
    priority.max(0.0).powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_in_priority() {
        assert!(priority_weight(0.8, 1.0) > priority_weight(0.2, 1.0));
    }

    #[test]
    fn zero_priority_is_zero_weight() {
        assert_eq!(priority_weight(0.0, 1.0), 0.0);
    }
}
