/*!
The Narsese sentence-level wire format (spec §6): parsing and printing the
text surface a term on its own doesn't cover -- punctuation, tense markers,
and the truth/desire-value literal.

[term::term_from_string](crate::term::term_from_string) already handles the
term grammar; this module only handles what wraps a term into a sentence
string. Grounded on `otter_sat::dispatch`'s text-report formatting for the
printing half, and on `term::parse`'s depth-tracking scan for the parsing half.
*/

use crate::sentence::{Sentence, Stamp};
use crate::term::{term_from_string, Interner};
use crate::truth::TruthValue;
use crate::types::err::ErrorKind;
use crate::types::{OccurrenceTime, StampId};

/// Input words that are commands, not Narsese (spec §6's reserved words).
pub const RESERVED_WORDS: [&str; 4] = ["count", "cycle", "save", "load"];

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// A sentence parsed from the wire format, before it has been stamped --
/// stamping needs an id from the caller's [StampIssuer](crate::sentence::StampIssuer).
pub enum ParsedSentence {
    Judgment { term: crate::term::TermHandle, truth: TruthValue },
    Goal { term: crate::term::TermHandle, desire: TruthValue },
    Question { term: crate::term::TermHandle },
}

impl ParsedSentence {
    /// Attaches a freshly issued id and `occurrence` to produce a [Sentence].
    pub fn into_sentence(self, id: StampId, occurrence: OccurrenceTime) -> Sentence {
        let stamp = Stamp::input(id, occurrence);
        match self {
            Self::Judgment { term, truth } => Sentence::Judgment { term, truth, stamp },
            Self::Goal { term, desire } => Sentence::Goal { term, desire, stamp },
            Self::Question { term } => Sentence::Question { term, stamp },
        }
    }
}

/// Parses a full sentence string: term, punctuation, optional tense marker,
/// optional truth/desire literal (spec §6).
pub fn sentence_from_string(s: &str, interner: &mut Interner) -> Result<(ParsedSentence, OccurrenceTime), ErrorKind> {
    let s = s.trim();
    if is_reserved_word(s) {
        return Err(ErrorKind::ReservedWord(s.to_string()));
    }

    let split = find_punctuation(s)?;
    let term_str = &s[..split];
    let punct = s.as_bytes()[split] as char;
    let rest = s[split + 1..].trim();

    let term = term_from_string(term_str, interner)?;

    let (tense_str, truth_str) = split_tail(rest);
    let occurrence = parse_tense(tense_str)?;
    let truth = parse_truth(truth_str, punct)?;

    let parsed = match punct {
        '.' => ParsedSentence::Judgment { term, truth: truth.unwrap_or(TruthValue::new(1.0, 0.9)) },
        '!' => ParsedSentence::Goal { term, desire: truth.unwrap_or(TruthValue::new(1.0, 0.9)) },
        '?' | '@' => ParsedSentence::Question { term },
        other => return Err(ErrorKind::InvalidSentence(format!("'{other}' is not a sentence punctuation"))),
    };
    Ok((parsed, occurrence))
}

/// Finds the index of the sentence punctuation character: the first
/// depth-zero occurrence of `.`, `!`, `?`, or `@` after the term.
fn find_punctuation(s: &str) -> Result<usize, ErrorKind> {
    let mut depth: i32 = 0;
    for (index, ch) in s.char_indices() {
        match ch {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth -= 1,
            '.' | '!' | '?' | '@' if depth == 0 => return Ok(index),
            _ => {}
        }
    }
    Err(ErrorKind::InvalidSentence("missing sentence punctuation (one of . ! ? @)".into()))
}

/// Splits the text after the punctuation into an optional tense token and an
/// optional truth-value token, in either order, whitespace-separated.
fn split_tail(rest: &str) -> (Option<&str>, Option<&str>) {
    let mut tense = None;
    let mut truth = None;
    for token in rest.split_whitespace() {
        if matches!(token, ":|:" | ":/:" | ":\\:") {
            tense = Some(token);
        } else if token.starts_with('%') {
            truth = Some(token);
        }
    }
    (tense, truth)
}

fn parse_tense(tense: Option<&str>) -> Result<OccurrenceTime, ErrorKind> {
    Ok(match tense {
        None => None,
        // The concrete occurrence number is assigned by the engine at intake
        // time (spec §5: occurrence times are cycle numbers); a tensed
        // sentence is only distinguished from an eternal one here.
        Some(":|:") | Some(":/:") | Some(":\\:") => Some(0),
        Some(other) => return Err(ErrorKind::InvalidSentence(format!("'{other}' is not a tense marker"))),
    })
}

fn parse_truth(truth: Option<&str>, punct: char) -> Result<Option<TruthValue>, ErrorKind> {
    let Some(truth) = truth else { return Ok(None) };
    if punct == '?' || punct == '@' {
        return Err(ErrorKind::InvalidSentence("a question carries no truth value".into()));
    }
    let inner = truth
        .strip_prefix('%')
        .and_then(|t| t.strip_suffix('%'))
        .ok_or_else(|| ErrorKind::InvalidSentence(format!("'{truth}' is not a well-formed %f;c% literal")))?;
    let mut parts = inner.split(';');
    let f: f64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| ErrorKind::InvalidSentence(format!("'{truth}' has no valid frequency")))?;
    let c: f64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| ErrorKind::InvalidSentence(format!("'{truth}' has no valid confidence")))?;
    if parts.next().is_some() {
        return Err(ErrorKind::InvalidSentence(format!("'{truth}' has extra fields")));
    }
    Ok(Some(TruthValue::new(f, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_judgment_with_truth() {
        let mut interner = Interner::default();
        let (parsed, occurrence) = sentence_from_string("(S-->M). %1.0;0.9%", &mut interner).unwrap();
        assert!(occurrence.is_none());
        let ParsedSentence::Judgment { truth, .. } = parsed else { panic!("expected a judgment") };
        assert_eq!(truth.frequency, 1.0);
        assert_eq!(truth.confidence, 0.9);
    }

    #[test]
    fn parses_question_without_truth() {
        let mut interner = Interner::default();
        let (parsed, _) = sentence_from_string("(S-->P)?", &mut interner).unwrap();
        assert!(matches!(parsed, ParsedSentence::Question { .. }));
    }

    #[test]
    fn rejects_reserved_words() {
        let mut interner = Interner::default();
        assert_eq!(sentence_from_string("cycle", &mut interner), Err(ErrorKind::ReservedWord("cycle".into())));
    }

    #[test]
    fn tense_marker_flags_an_event() {
        let mut interner = Interner::default();
        let (_, occurrence) = sentence_from_string("(A-->B). :|: %1.0;0.9%", &mut interner).unwrap();
        assert!(occurrence.is_some());
    }
}
