/*!
`term_from_string`: the recursive-descent parser from spec §4.1.

Responsibilities, in the order the spec lists them: bracket balance check;
top-level copula scan (depth counter, first match); recursive descent over
the comma delimiter at depth 0; detection of set openers, array sigil,
variable sigils, and the negation connector.
*/

use super::{
    connector::Connector, copula::Copula, variable::VariableKind, ArrayTerm, Interner, TermHandle,
};
use crate::types::err::ErrorKind;

/// Parses `s` as a Narsese term, interning the result (and every subterm)
/// through `interner`.
pub fn term_from_string(s: &str, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ErrorKind::InvalidTerm("empty term".into()));
    }
    check_balanced(s)?;

    let mut chars = s.chars();
    match chars.next().unwrap() {
        '(' => {
            let inner = matching_inner(s, '(', ')')?;
            parse_parenthesized(inner, interner)
        }
        '{' => {
            let inner = matching_inner(s, '{', '}')?;
            let elements = split_top_level(inner, ',')
                .into_iter()
                .map(|e| term_from_string(e, interner))
                .collect::<Result<Vec<_>, _>>()?;
            interner.set(Connector::ExtensionalSet, elements)
        }
        '[' => {
            let inner = matching_inner(s, '[', ']')?;
            let elements = split_top_level(inner, ',')
                .into_iter()
                .map(|e| term_from_string(e, interner))
                .collect::<Result<Vec<_>, _>>()?;
            interner.set(Connector::IntensionalSet, elements)
        }
        '#' => parse_variable(&s[1..], interner),
        '?' => {
            let name = &s[1..];
            if name.is_empty() || name.contains(['(', ')']) {
                return Err(ErrorKind::InvalidTerm(format!("malformed query variable '{s}'")));
            }
            interner.variable(name, VariableKind::Query, vec![])
        }
        '@' => parse_array(&s[1..], interner),
        _ => {
            if !super::Atom::is_well_formed(s) {
                return Err(ErrorKind::InvalidTerm(format!("'{s}' is not a well-formed atom")));
            }
            interner.atom(s)
        }
    }
}

/// Parses the text inside a statement/compound's outer parentheses: first
/// scans for a top-level copula (subject/copula/predicate), and falls back
/// to a connector-led compound.
fn parse_parenthesized(inner: &str, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    if let Some((copula, subject_str, predicate_str)) = scan_top_level_copula(inner) {
        let subject = term_from_string(subject_str, interner)?;
        let predicate = term_from_string(predicate_str, interner)?;
        return Ok(interner.statement(copula, subject, predicate));
    }

    let parts = split_top_level(inner, ',');
    let (connector_str, rest) = parts
        .split_first()
        .ok_or_else(|| ErrorKind::InvalidTerm("empty compound".into()))?;
    let connector = Connector::from_token(connector_str)
        .ok_or_else(|| ErrorKind::InvalidTerm(format!("'{connector_str}' is not a known connector")))?;
    let subterms = rest
        .iter()
        .map(|t| term_from_string(t, interner))
        .collect::<Result<Vec<_>, _>>()?;
    interner.compound(connector, subterms)
}

/// The fixed alphabet of copula tokens, checked longest-first is unnecessary
/// since every copula token is exactly three characters.
const COPULA_TOKENS: &[&str] = &[
    "-->", "<->", "==>", "<=>", "=/>", "=|>", "=\\>", "</>", "<|>",
];

/// Scans `inner` left to right, tracking bracket depth, for the first
/// position at depth 0 where a copula token matches -- spec §4.1's "top-level
/// copula scan (depth counter, first match)".
fn scan_top_level_copula(inner: &str) -> Option<(Copula, &str, &str)> {
    let mut depth: i32 = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth -= 1,
            _ => {}
        }
        if depth == 0 && i > 0 {
            if let Some(candidate) = inner.get(i..i + 3) {
                if let Some(token) = COPULA_TOKENS.iter().find(|t| **t == candidate) {
                    if i + token.len() < inner.len() {
                        let copula = Copula::from_token(token).unwrap();
                        return Some((copula, &inner[..i], &inner[i + token.len()..]));
                    }
                }
            }
        }
    }
    None
}

fn parse_variable(rest: &str, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    match rest.find('(') {
        None => {
            if rest.is_empty() {
                return Err(ErrorKind::InvalidTerm("empty variable name".into()));
            }
            interner.variable(rest, VariableKind::Independent, vec![])
        }
        Some(open) => {
            if !rest.ends_with(')') {
                return Err(ErrorKind::InvalidTerm(format!("malformed dependent variable '#{rest}'")));
            }
            let name = &rest[..open];
            let dep_str = &rest[open + 1..rest.len() - 1];
            let dependencies = split_top_level(dep_str, ',')
                .into_iter()
                .map(|d| term_from_string(d, interner))
                .collect::<Result<Vec<_>, _>>()?;
            interner.variable(name, VariableKind::Dependent, dependencies)
        }
    }
}

fn parse_array(rest: &str, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    match rest.find('[') {
        None => {
            if rest.is_empty() {
                return Err(ErrorKind::InvalidTerm("empty array name".into()));
            }
            interner.array(ArrayTerm::whole(rest, 1))
        }
        Some(open) => {
            if !rest.ends_with(']') {
                return Err(ErrorKind::InvalidTerm(format!("malformed array element '@{rest}'")));
            }
            let name = &rest[..open];
            let index_str = &rest[open + 1..rest.len() - 1];
            let index = split_top_level(index_str, ',')
                .into_iter()
                .map(|c| {
                    c.trim()
                        .parse::<f32>()
                        .map_err(|_| ErrorKind::InvalidTerm(format!("'{c}' is not a float index")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            interner.array(ArrayTerm::element(name, index))
        }
    }
}

/// Splits `s` on `delim`, only at bracket depth 0.
fn split_top_level(s: &str, delim: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth -= 1,
            c if c == delim && depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(s[start..].trim());
    parts
}

/// Checks every bracket in `s` is balanced and correctly nested.
fn check_balanced(s: &str) -> Result<(), ErrorKind> {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '{' | '[' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return Err(ErrorKind::InvalidTerm(format!("unbalanced ')' in '{s}'")));
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return Err(ErrorKind::InvalidTerm(format!("unbalanced '}}' in '{s}'")));
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return Err(ErrorKind::InvalidTerm(format!("unbalanced ']' in '{s}'")));
                }
            }
            _ => {}
        }
    }
    if !stack.is_empty() {
        return Err(ErrorKind::InvalidTerm(format!("unbalanced brackets in '{s}'")));
    }
    Ok(())
}

/// Returns the substring strictly inside `s`'s outer `open`/`close` pair,
/// assuming `s` starts with `open` and [check_balanced] already passed.
fn matching_inner<'a>(s: &'a str, open: char, close: char) -> Result<&'a str, ErrorKind> {
    if !s.ends_with(close) {
        return Err(ErrorKind::InvalidTerm(format!("'{s}' is missing a closing '{close}'")));
    }
    Ok(&s[open.len_utf8()..s.len() - close.len_utf8()])
}
