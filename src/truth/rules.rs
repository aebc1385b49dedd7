/*!
The truth-value functions of spec §4.2's table. One function per named rule;
each is a pure function of its premises' `(frequency, confidence)` pairs.

Functions that route through evidence counts ([Induction], [Abduction],
[Exemplification], [Comparison], [Conversion], [Contraposition]) delegate to
[evidence::from_counts](super::evidence::from_counts) so the `k`-dependence
lives in one place.
*/

use super::evidence::from_counts;
use super::TruthValue;

/// `(w+1+w+2)/(w1+w2), w/(w+k)` over the combined evidence -- commutative in
/// its premises, and never decreases total evidence (spec §8).
pub fn revision(t1: TruthValue, t2: TruthValue, k: f64) -> TruthValue {
    let (w_pos_1, w1) = super::evidence::to_counts(t1, k);
    let (w_pos_2, w2) = super::evidence::to_counts(t2, k);
    from_counts(w_pos_1 + w_pos_2, w1 + w2, k)
}

pub fn deduction(t1: TruthValue, t2: TruthValue) -> TruthValue {
    TruthValue::new(
        t1.frequency * t2.frequency,
        t1.frequency * t2.frequency * t1.confidence * t2.confidence,
    )
}

pub fn analogy(t1: TruthValue, t2: TruthValue) -> TruthValue {
    TruthValue::new(
        t1.frequency * t2.frequency,
        t2.frequency * t1.confidence * t2.confidence,
    )
}

pub fn resemblance(t1: TruthValue, t2: TruthValue) -> TruthValue {
    let f = t1.frequency * t2.frequency;
    TruthValue::new(
        f,
        (t1.frequency + t2.frequency - f) * t1.confidence * t2.confidence,
    )
}

pub fn induction(t1: TruthValue, t2: TruthValue, k: f64) -> TruthValue {
    let w_pos = t1.frequency * t2.frequency * t1.confidence * t2.confidence;
    let w = t2.frequency * t1.confidence * t2.confidence;
    from_counts(w_pos, w, k)
}

pub fn abduction(t1: TruthValue, t2: TruthValue, k: f64) -> TruthValue {
    let w_pos = t1.frequency * t2.frequency * t1.confidence * t2.confidence;
    let w = t1.frequency * t1.confidence * t2.confidence;
    from_counts(w_pos, w, k)
}

pub fn exemplification(t1: TruthValue, t2: TruthValue, k: f64) -> TruthValue {
    let w = t1.frequency * t2.frequency * t1.confidence * t2.confidence;
    from_counts(w, w, k)
}

pub fn comparison(t1: TruthValue, t2: TruthValue, k: f64) -> TruthValue {
    let w_pos = t1.frequency * t2.frequency * t1.confidence * t2.confidence;
    let f_union = t1.frequency + t2.frequency - t1.frequency * t2.frequency;
    let w = f_union * t1.confidence * t2.confidence;
    from_counts(w_pos, w, k)
}

pub fn intersection(t1: TruthValue, t2: TruthValue) -> TruthValue {
    TruthValue::new(t1.frequency * t2.frequency, t1.confidence * t2.confidence)
}

pub fn union(t1: TruthValue, t2: TruthValue) -> TruthValue {
    TruthValue::new(
        t1.frequency + t2.frequency - t1.frequency * t2.frequency,
        t1.confidence * t2.confidence,
    )
}

pub fn difference(t1: TruthValue, t2: TruthValue) -> TruthValue {
    TruthValue::new(t1.frequency * (1.0 - t2.frequency), t1.confidence * t2.confidence)
}

/// `Negation(Negation(j)).truth == j.truth` (spec §8).
pub fn negation(t: TruthValue) -> TruthValue {
    TruthValue::new(1.0 - t.frequency, t.confidence)
}

pub fn conversion(t: TruthValue, k: f64) -> TruthValue {
    let w_pos = t.frequency * t.confidence;
    from_counts(w_pos, w_pos, k)
}

pub fn contraposition(t: TruthValue, k: f64) -> TruthValue {
    let w = (1.0 - t.frequency) * t.confidence;
    from_counts(0.0, w, k)
}

/// `f, 1/(k+c)`: drops an event's truth value to an eternal one.
pub fn eternalisation(t: TruthValue, k: f64) -> TruthValue {
    TruthValue::new(t.frequency, 1.0 / (k + t.confidence))
}

/// Projects a belief's truth value, stated at `t_belief`, to the perspective
/// of `t_target`, from the present `t_now`. Reduces to identity in both
/// frequency and confidence when `t_target == t_belief` (spec §8).
pub fn projection(t: TruthValue, t_belief: i64, t_target: i64, t_now: i64) -> TruthValue {
    let num = (t_belief - t_target).unsigned_abs() as f64;
    let den = (t_belief - t_now).unsigned_abs() as f64 + (t_target - t_now).unsigned_abs() as f64;
    let factor = if den == 0.0 { 1.0 } else { 1.0 - num / den };
    TruthValue::new(t.frequency, factor * t.confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_is_commutative() {
        let j1 = TruthValue::new(1.0, 0.9);
        let j2 = TruthValue::new(0.0, 0.9);
        let a = revision(j1, j2, 1.0);
        let b = revision(j2, j1, 1.0);
        assert!((a.frequency - b.frequency).abs() < 1e-12);
        assert!((a.confidence - b.confidence).abs() < 1e-12);
    }

    #[test]
    fn revision_worked_example() {
        // spec §8 scenario 4, k=1
        let j1 = TruthValue::new(1.0, 0.9);
        let j2 = TruthValue::new(0.0, 0.9);
        let merged = revision(j1, j2, 1.0);
        assert!((merged.frequency - 0.5).abs() < 1e-6);
        assert!((merged.confidence - 0.9473).abs() < 1e-3);
    }

    #[test]
    fn negation_round_trip() {
        let t = TruthValue::new(0.3, 0.7);
        let twice = negation(negation(t));
        assert!((twice.frequency - t.frequency).abs() < 1e-12);
        assert!((twice.confidence - t.confidence).abs() < 1e-12);
    }

    #[test]
    fn deduction_worked_example() {
        // spec §8 scenario 1, k irrelevant for deduction
        let t1 = TruthValue::new(1.0, 0.9);
        let t2 = TruthValue::new(1.0, 0.9);
        let conclusion = deduction(t1, t2);
        assert!((conclusion.frequency - 1.0).abs() < 1e-12);
        assert!((conclusion.confidence - 0.81).abs() < 1e-6);
    }

    #[test]
    fn induction_worked_example() {
        // spec §8 scenario 2, k=1
        let t1 = TruthValue::new(1.0, 0.9);
        let t2 = TruthValue::new(1.0, 0.9);
        let conclusion = induction(t1, t2, 1.0);
        assert!((conclusion.frequency - 1.0).abs() < 1e-12);
        assert!((conclusion.confidence - 0.447).abs() < 1e-3);
    }

    #[test]
    fn projection_identity_at_belief_time() {
        let t = TruthValue::new(0.6, 0.8);
        let projected = projection(t, 10, 10, 7);
        assert!((projected.frequency - t.frequency).abs() < 1e-12);
        assert!((projected.confidence - t.confidence).abs() < 1e-12);
    }
}
