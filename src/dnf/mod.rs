//! This module contains the disjunctive normal form of formulas and its case algebra.

use crate::utils::LabelType;
use crate::Fact;

/// An ordered sequence of facts, implicitly conjoined.
///
/// Duplicate facts are permitted and semantically idempotent.
pub type Conjunction<T> = Vec<Fact<T>>;

/// An ordered sequence of conjunctions, implicitly disjoined.
///
/// The empty DNF denotes `false`; a DNF containing the empty conjunction denotes `true`.
pub type Dnf<T> = Vec<Conjunction<T>>;

mod decomposition;
pub use decomposition::cases;
pub use decomposition::consistent;
pub use decomposition::decompose;
pub use decomposition::impossible;

mod algebra;
pub use algebra::combine;
pub use algebra::consistent_cases;
pub use algebra::negate;

/// Renders a DNF in the canonical text form: facts joined by ` /\ ` inside each
/// conjunction, conjunctions joined by ` \/ `.
///
/// The empty conjunction renders as `true` and the empty DNF as `false`, matching
/// what they denote.
///
/// # Example
///
/// ```
/// # use proarg::{dnf_to_string, Fact};
/// let dnf = vec![vec![Fact::Positive("a"), Fact::Negative("b")], vec![Fact::Positive("c")]];
/// assert_eq!("a /\\ ¬b \\/ c", dnf_to_string(&dnf));
/// ```
pub fn dnf_to_string<T>(dnf: &[Conjunction<T>]) -> String
where
    T: LabelType,
{
    if dnf.is_empty() {
        return "false".to_string();
    }
    dnf.iter()
        .map(|conjunction| {
            if conjunction.is_empty() {
                "true".to_string()
            } else {
                conjunction
                    .iter()
                    .map(|fact| fact.to_string())
                    .collect::<Vec<String>>()
                    .join(" /\\ ")
            }
        })
        .collect::<Vec<String>>()
        .join(" \\/ ")
}
