use super::{consistent, Conjunction, Dnf};
use crate::utils::LabelType;
use crate::Fact;

/// The classical conjunction of two DNFs: each pair of conjunctions, concatenated.
///
/// Pairs are enumerated left-to-right, so the result order is a pure function of
/// the input orders.
///
/// # Example
///
/// ```
/// # use proarg::{combine, Fact};
/// let left = vec![vec![Fact::Positive("a")], vec![Fact::Positive("b")]];
/// let right = vec![vec![Fact::Negative("c")]];
/// assert_eq!(
///     vec![
///         vec![Fact::Positive("a"), Fact::Negative("c")],
///         vec![Fact::Positive("b"), Fact::Negative("c")],
///     ],
///     combine(&left, &right)
/// );
/// ```
pub fn combine<T>(left: &[Conjunction<T>], right: &[Conjunction<T>]) -> Dnf<T>
where
    T: LabelType,
{
    left.iter()
        .flat_map(|left_conjunction| {
            right.iter().map(move |right_conjunction| {
                let mut conjunction = left_conjunction.clone();
                conjunction.extend(right_conjunction.iter().cloned());
                conjunction
            })
        })
        .collect()
}

/// The DNF of the classical negation of a DNF.
///
/// Every way of picking one fact per conjunction yields a conjunction of the
/// flipped picks. Negating the empty DNF (`false`) yields `true` and conversely.
///
/// # Example
///
/// ```
/// # use proarg::{negate, Fact};
/// let dnf = vec![vec![Fact::Positive("a"), Fact::Positive("b")]];
/// assert_eq!(
///     vec![vec![Fact::Negative("a")], vec![Fact::Negative("b")]],
///     negate(&dnf)
/// );
/// ```
pub fn negate<T>(dnf: &[Conjunction<T>]) -> Dnf<T>
where
    T: LabelType,
{
    let mut result: Dnf<T> = vec![vec![]];
    for conjunction in dnf {
        let mut crossed = Vec::with_capacity(result.len() * conjunction.len());
        for partial in &result {
            for fact in conjunction {
                let mut extended = partial.clone();
                extended.push(fact.negated());
                crossed.push(extended);
            }
        }
        result = crossed;
    }
    result
}

/// The sub-DNF of `right` made of the conjunctions whose every combination with a
/// conjunction of `left` is consistent.
///
/// When `left` is empty there is nothing to clash with and `right` is returned whole.
pub fn consistent_cases<T>(left: &[Conjunction<T>], right: &[Conjunction<T>]) -> Dnf<T>
where
    T: LabelType,
{
    right
        .iter()
        .filter(|right_conjunction| {
            left.iter()
                .all(|left_conjunction| consistent_together(left_conjunction, right_conjunction))
        })
        .cloned()
        .collect()
}

fn consistent_together<T>(left: &[Fact<T>], right: &[Fact<T>]) -> bool
where
    T: LabelType,
{
    consistent(left)
        && consistent(right)
        && !left
            .iter()
            .any(|fact| right.iter().any(|other| fact.contradicts(other)))
}
