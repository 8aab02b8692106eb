use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

use super::read_formula;
use crate::Rulebase;

lazy_static! {
    static ref PREMISE_LINE_PATTERN: Regex = Regex::new(r"^\s*prem\((.+)\)\.\s*$").unwrap();
    static ref RANK_LINE_PATTERN: Regex =
        Regex::new(r"^\s*rank\(\s*(-?\d+)\s*,(.+)\)\.\s*$").unwrap();
    static ref QUESTION_LINE_PATTERN: Regex = Regex::new(r"^\s*question\((.+)\)\.\s*$").unwrap();
}

/// The type of callback functions to call when warnings are raised while reading a rulebase.
///
/// Such callback functions take as input the line number and the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A reader for the rulebase format.
///
/// # Rulebase format
///
/// A rulebase is given line by line. `prem(F).` declares the formula `F` as a
/// premise (declaration order is the information base order), `rank(N, F).`
/// assigns the integer rank `N` to an already-declared premise, and
/// `question(F).` states the question under deliberation. Blank lines and lines
/// starting with `%` are skipped. Formulas use the syntax of
/// [read_formula](crate::read_formula).
///
/// ```text
/// prem(employed -> mayRequest).
/// prem(employed /\ militaryOfficial -> ¬mayRequest).
/// prem(employed).
/// rank(1, employed -> mayRequest).
/// rank(2, employed /\ militaryOfficial -> ¬mayRequest).
/// question(mayRequest).
/// ```
///
/// Declaring a premise twice or ranking it twice raises a warning and keeps the
/// first declaration; ranking an unknown premise or stating a second question is
/// an error.
///
/// # Example
///
/// ```
/// # use proarg::{Rulebase, RulebaseReader};
/// fn read_rulebase_from_str(s: &str) -> Rulebase<String> {
///     let reader = RulebaseReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid rulebase")
/// }
/// # read_rulebase_from_str("prem(a).");
/// ```
#[derive(Default)]
pub struct RulebaseReader {
    warning_handlers: Vec<WarningHandler>,
}

impl RulebaseReader {
    /// Reads a [Rulebase].
    ///
    /// In case warnings are raised, the callback functions registered by
    /// [add_warning_handler](Self::add_warning_handler) are triggered.
    pub fn read(&self, reader: &mut dyn Read) -> Result<Rulebase<String>> {
        let mut rulebase = Rulebase::new();
        let buffered = BufReader::new(reader);
        for (index, line) in buffered.lines().enumerate() {
            let context = || format!("while reading line with index {}", index);
            let line = line.with_context(context)?;
            if line.trim().is_empty() || line.trim_start().starts_with('%') {
                continue;
            }
            if let Some(captures) = PREMISE_LINE_PATTERN.captures(&line) {
                let premise = read_formula(&captures[1]).with_context(context)?;
                if !rulebase.add_premise(premise.clone()) {
                    self.raise_warning(1 + index, format!("premise {} already declared", premise));
                }
                continue;
            }
            if let Some(captures) = RANK_LINE_PATTERN.captures(&line) {
                let rank: i64 = captures[1].parse().with_context(context)?;
                let premise = read_formula(&captures[2]).with_context(context)?;
                if rulebase.information().contains(&premise) {
                    if !rulebase.set_rank(rank, &premise) {
                        self.raise_warning(1 + index, format!("premise {} already ranked", premise));
                    }
                } else {
                    return Err(anyhow!("rank given to undeclared premise {}", premise))
                        .with_context(context);
                }
                continue;
            }
            if let Some(captures) = QUESTION_LINE_PATTERN.captures(&line) {
                if rulebase.question().is_some() {
                    return Err(anyhow!("question is already stated")).with_context(context);
                }
                let question = read_formula(&captures[1]).with_context(context)?;
                rulebase.set_question(question);
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", line)).with_context(context);
        }
        Ok(rulebase)
    }

    /// Adds a callback function to call when warnings are raised while reading a rulebase.
    ///
    /// Such callback functions take as input the line number and the warning message.
    pub fn add_warning_handler(&mut self, handler: WarningHandler) {
        self.warning_handlers.push(handler);
    }

    fn raise_warning(&self, line_number: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|handler| (handler)(line_number, message.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Formula;
    use std::{cell::RefCell, rc::Rc};

    fn var(name: &str) -> Formula<String> {
        Formula::var(name.to_string())
    }

    #[test]
    fn test_premise_line_pattern() {
        assert!(PREMISE_LINE_PATTERN.is_match("prem(a)."));
        assert!(PREMISE_LINE_PATTERN.is_match("  prem(a -> b).  "));
        assert!(!PREMISE_LINE_PATTERN.is_match("prem(a)"));
        assert!(!PREMISE_LINE_PATTERN.is_match("prem()."));
        assert!(!PREMISE_LINE_PATTERN.is_match("premise(a)."));
    }

    #[test]
    fn test_rank_line_pattern() {
        assert!(RANK_LINE_PATTERN.is_match("rank(1, a)."));
        assert!(RANK_LINE_PATTERN.is_match("rank( -2 , a -> b)."));
        assert!(!RANK_LINE_PATTERN.is_match("rank(x, a)."));
        assert!(!RANK_LINE_PATTERN.is_match("rank(1)."));
    }

    #[test]
    fn test_read_ok() {
        let instance = "prem(a -> b).\nprem(a).\nrank(1, a -> b).\nquestion(b).\n";
        let rulebase = RulebaseReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(
            &[var("a").implies(var("b")), var("a")],
            rulebase.information()
        );
        assert_eq!(Some(&var("b")), rulebase.question());
    }

    #[test]
    fn test_read_skips_blank_and_comment_lines() {
        let instance = "\n% a comment\nprem(a).\n\n";
        let rulebase = RulebaseReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(&[var("a")], rulebase.information());
    }

    #[test]
    fn test_read_empty() {
        let rulebase = RulebaseReader::default().read(&mut "".as_bytes()).unwrap();
        assert!(rulebase.information().is_empty());
        assert!(rulebase.question().is_none());
    }

    #[test]
    fn test_read_syntax_error() {
        assert!(RulebaseReader::default()
            .read(&mut "premises(a).".as_bytes())
            .is_err());
        assert!(RulebaseReader::default()
            .read(&mut "prem(a /\\).".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_rank_for_undeclared_premise() {
        assert!(RulebaseReader::default()
            .read(&mut "prem(a).\nrank(1, b).".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_second_question() {
        assert!(RulebaseReader::default()
            .read(&mut "question(a).\nquestion(b).".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_warns_on_duplicate_premise() {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = RulebaseReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        let rulebase = reader.read(&mut "prem(a).\nprem(a).".as_bytes()).unwrap();
        assert_eq!(1, rulebase.information().len());
        assert_eq!(
            vec![(2, "premise a already declared".to_string())],
            warnings.borrow().clone()
        );
    }

    #[test]
    fn test_read_warns_on_duplicate_rank() {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = RulebaseReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        let instance = "prem(a).\nrank(1, a).\nrank(2, a).";
        let rulebase = reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!(
            vec![(3, "premise a already ranked".to_string())],
            warnings.borrow().clone()
        );
        assert!(rulebase.question().is_none());
    }
}
