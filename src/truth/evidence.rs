//! Conversions between (frequency, confidence) and (positive, total) evidence
//! counts, parameterised by the system constant `k` (spec §3/§4.2).

use super::TruthValue;

/// Positive evidence `w+`, and total evidence `w`, for `(f, c)` under `k`.
pub fn to_counts(truth: TruthValue, k: f64) -> (f64, f64) {
    let TruthValue { frequency, confidence } = truth;
    let w = k * confidence / (1.0 - confidence);
    let w_pos = w * frequency;
    (w_pos, w)
}

/// Negative evidence `w- = w - w+`.
pub fn negative(w_pos: f64, w: f64) -> f64 {
    w - w_pos
}

/// The truth value corresponding to evidence counts `(w+, w)` under `k`.
pub fn from_counts(w_pos: f64, w: f64, k: f64) -> TruthValue {
    let frequency = if w_pos == w { 1.0 } else { w_pos / w };
    let confidence = w / (w + k);
    TruthValue::new(frequency, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let truth = TruthValue::new(0.8, 0.6);
        let (w_pos, w) = to_counts(truth, 1.0);
        let back = from_counts(w_pos, w, 1.0);
        assert!((back.frequency - truth.frequency).abs() < 1e-9);
        assert!((back.confidence - truth.confidence).abs() < 1e-9);
    }

    #[test]
    fn zero_evidence_frequency_is_one() {
        assert_eq!(from_counts(0.0, 0.0, 1.0).frequency, 1.0);
    }
}
