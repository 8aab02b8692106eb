use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::Formula;

lazy_static! {
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"^\s*(<->|->|/\\|\\/|¬|~|-|\(|\)|[_[:alpha:]][_[:alpha:]\d]*)").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Atom(String),
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    Equiv,
    LeftParen,
    RightParen,
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut remaining = text;
    while !remaining.trim_start().is_empty() {
        let captures = TOKEN_PATTERN
            .captures(remaining)
            .ok_or_else(|| anyhow!("unexpected character near \"{}\"", remaining.trim_start()))?;
        let matched = captures.get(1).unwrap();
        tokens.push(match matched.as_str() {
            "<->" => Token::Equiv,
            "->" => Token::Implies,
            "/\\" => Token::And,
            "\\/" => Token::Or,
            "¬" | "~" | "-" | "not" => Token::Not,
            "(" => Token::LeftParen,
            ")" => Token::RightParen,
            "true" => Token::True,
            "false" => Token::False,
            "and" => Token::And,
            "or" => Token::Or,
            atom => Token::Atom(atom.to_string()),
        });
        remaining = &remaining[matched.end()..];
    }
    Ok(tokens)
}

struct FormulaParser {
    tokens: Vec<Token>,
    position: usize,
}

impl FormulaParser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance_if(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    // loosest binding; left-associative
    fn parse_equivalence(&mut self) -> Result<Formula<String>> {
        let mut formula = self.parse_implication()?;
        while self.advance_if(&Token::Equiv) {
            formula = formula.equiv(self.parse_implication()?);
        }
        Ok(formula)
    }

    // right-associative
    fn parse_implication(&mut self) -> Result<Formula<String>> {
        let formula = self.parse_disjunction()?;
        if self.advance_if(&Token::Implies) {
            return Ok(formula.implies(self.parse_implication()?));
        }
        Ok(formula)
    }

    fn parse_disjunction(&mut self) -> Result<Formula<String>> {
        let mut formula = self.parse_conjunction()?;
        while self.advance_if(&Token::Or) {
            formula = formula.or(self.parse_conjunction()?);
        }
        Ok(formula)
    }

    fn parse_conjunction(&mut self) -> Result<Formula<String>> {
        let mut formula = self.parse_negation()?;
        while self.advance_if(&Token::And) {
            formula = formula.and(self.parse_negation()?);
        }
        Ok(formula)
    }

    fn parse_negation(&mut self) -> Result<Formula<String>> {
        if self.advance_if(&Token::Not) {
            return Ok(self.parse_negation()?.not());
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Formula<String>> {
        match self.peek().cloned() {
            Some(Token::Atom(name)) => {
                self.position += 1;
                Ok(Formula::var(name))
            }
            Some(Token::True) => {
                self.position += 1;
                Ok(Formula::True)
            }
            Some(Token::False) => {
                self.position += 1;
                Ok(Formula::False)
            }
            Some(Token::LeftParen) => {
                self.position += 1;
                let formula = self.parse_equivalence()?;
                if !self.advance_if(&Token::RightParen) {
                    return Err(anyhow!("missing closing parenthesis"));
                }
                Ok(formula)
            }
            Some(token) => Err(anyhow!("unexpected token {:?}", token)),
            None => Err(anyhow!("unexpected end of formula")),
        }
    }
}

/// Reads a formula from its text form.
///
/// The surface syntax uses `/\` (or `and`), `\/` (or `or`), `->`, `<->`,
/// `¬`/`~`/`-` (or `not`), parentheses, the constants `true` and `false`, and atom
/// names made of letters, digits and underscores, not starting with a digit.
/// Binding, loosest to tightest: `<->`, `->` (right-associative), `\/`, `/\`,
/// negation.
///
/// The canonical text form of any formula reads back to a structurally equal one.
///
/// # Example
///
/// ```
/// # use proarg::{read_formula, Formula};
/// let formula = read_formula("a /\\ b -> ¬c").unwrap();
/// assert_eq!(
///     Formula::var("a".to_string())
///         .and(Formula::var("b".to_string()))
///         .implies(Formula::var("c".to_string()).not()),
///     formula
/// );
/// ```
pub fn read_formula(text: &str) -> Result<Formula<String>> {
    let tokens = tokenize(text)?;
    let mut parser = FormulaParser {
        tokens,
        position: 0,
    };
    let formula = parser.parse_equivalence()?;
    match parser.peek() {
        None => Ok(formula),
        Some(token) => Err(anyhow!("dangling token {:?} after formula", token)),
    }
}
