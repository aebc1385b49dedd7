//! Temporal specialisation of Induction and Comparison (spec §4.3).

use crate::term::Copula;

/// The copula Temporal Induction derives when both premises are events at
/// `t1` and `t2`, per spec §4.3's ordering table.
pub fn induction_copula(t1: u64, t2: u64) -> Copula {
    match t1.cmp(&t2) {
        std::cmp::Ordering::Equal => Copula::ConcurrentImplication,
        std::cmp::Ordering::Less => Copula::PredictiveImplication,
        std::cmp::Ordering::Greater => Copula::PredictiveImplication,
    }
}

/// The copula Temporal Comparison derives, dually to [induction_copula].
pub fn comparison_copula(t1: u64, t2: u64) -> Copula {
    match t1.cmp(&t2) {
        std::cmp::Ordering::Equal => Copula::ConcurrentEquivalence,
        _ => Copula::PredictiveEquivalence,
    }
}

/// True iff `t1` is the later-occurring time, per spec §4.3's table
/// ("`t1 > t2` => t2 predictive-implies t1") -- the derived conclusion's
/// subject/predicate must be swapped so the earlier event is always the
/// subject of a predictive copula.
pub fn earlier_is_first(t1: u64, t2: u64) -> bool {
    t1 <= t2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_when_times_equal() {
        assert_eq!(induction_copula(5, 5), Copula::ConcurrentImplication);
        assert_eq!(comparison_copula(5, 5), Copula::ConcurrentEquivalence);
    }

    #[test]
    fn predictive_when_times_differ() {
        assert_eq!(induction_copula(1, 5), Copula::PredictiveImplication);
        assert_eq!(induction_copula(5, 1), Copula::PredictiveImplication);
        assert!(earlier_is_first(1, 5));
        assert!(!earlier_is_first(5, 1));
    }
}
