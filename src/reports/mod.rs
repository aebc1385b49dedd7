/*!
Plain-text reports surfaced by a cycle, for an embedder to print or log (spec
§4.7 step 3, §6).

Grounded on `otter_lib::context::reports`'s pattern of a thin, embedder-facing
formatting layer kept separate from the engine itself: [Engine](crate::context::Engine)
returns [Sentence](crate::sentence::Sentence)s and the engine never prints
anything on its own account; turning those into text is this module's job.
*/

use crate::sentence::Sentence;

/// One reportable event produced by a working cycle.
#[derive(Debug, Clone)]
pub enum Report {
    /// An answer to a previously asked question (spec §4.3 Choice, §4.7 step 3).
    Answer(Sentence),
    /// A cycle completed with nothing to report.
    Idle,
}

impl Report {
    /// Wraps every sentence `do_working_cycle` returned as answers this cycle.
    pub fn from_cycle(answers: Vec<Sentence>) -> Vec<Report> {
        if answers.is_empty() {
            return vec![Report::Idle];
        }
        answers.into_iter().map(Report::Answer).collect()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Answer(sentence) => write!(f, "ANSWER: {sentence}"),
            Report::Idle => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Stamp;
    use crate::term::Interner;
    use crate::truth::TruthValue;

    #[test]
    fn empty_answers_report_idle() {
        assert!(matches!(Report::from_cycle(Vec::new()).as_slice(), [Report::Idle]));
    }

    #[test]
    fn an_answer_formats_with_its_term() {
        let mut interner = Interner::default();
        let term = interner.atom("bird").unwrap();
        let sentence = Sentence::Judgment { term, truth: TruthValue::new(1.0, 0.9), stamp: Stamp::input(0, None) };
        let reports = Report::from_cycle(vec![sentence]);
        let Report::Answer(rendered) = &reports[0] else { panic!("expected an answer") };
        assert_eq!(format!("{}", Report::Answer(rendered.clone())), format!("ANSWER: {rendered}"));
    }
}
