use super::{combine, Conjunction, Dnf};
use crate::utils::LabelType;
use crate::{Fact, Formula};

/// Rewrites a formula into disjunctive normal form by structural recursion.
///
/// No simplification is performed along the way: tautological and contradictory
/// conjunctions are kept, so the result reflects the shape of the input formula.
/// Use [cases] to retain the consistent conjunctions only.
///
/// # Example
///
/// ```
/// # use proarg::{decompose, Fact, Formula};
/// let formula = Formula::var("a").implies(Formula::var("b"));
/// assert_eq!(
///     vec![vec![Fact::Negative("a")], vec![Fact::Positive("b")]],
///     decompose(&formula)
/// );
/// ```
pub fn decompose<T>(formula: &Formula<T>) -> Dnf<T>
where
    T: LabelType,
{
    match formula {
        Formula::True => vec![vec![]],
        Formula::False => vec![],
        Formula::Variable(a) => vec![vec![Fact::Positive(a.clone())]],
        Formula::Not(p) => decompose_negated(p),
        Formula::And(l, r) => combine(&decompose(l), &decompose(r)),
        Formula::Or(l, r) => {
            let mut dnf = decompose(l);
            dnf.extend(decompose(r));
            dnf
        }
        Formula::Implies(l, r) => {
            // l -> r is ¬l \/ r
            let mut dnf = decompose_negated(l);
            dnf.extend(decompose(r));
            dnf
        }
        Formula::Equiv(l, r) => {
            // l <-> r is (l -> r) /\ (r -> l)
            let mut forward = decompose_negated(l);
            forward.extend(decompose(r));
            let mut backward = decompose_negated(r);
            backward.extend(decompose(l));
            combine(&forward, &backward)
        }
    }
}

/// The DNF of the negation of `formula`, driven by the dual of each connective.
fn decompose_negated<T>(formula: &Formula<T>) -> Dnf<T>
where
    T: LabelType,
{
    match formula {
        Formula::True => vec![],
        Formula::False => vec![vec![]],
        Formula::Variable(a) => vec![vec![Fact::Negative(a.clone())]],
        Formula::Not(p) => decompose(p),
        Formula::And(l, r) => {
            let mut dnf = decompose_negated(l);
            dnf.extend(decompose_negated(r));
            dnf
        }
        Formula::Or(l, r) => combine(&decompose_negated(l), &decompose_negated(r)),
        Formula::Implies(l, r) => {
            // ¬(l -> r) is expanded through the contrapositive (¬r -> ¬l),
            // not as the classical l /\ ¬r.
            // TODO: audit the shipped rulebases for reliance on this shape,
            // then move to the classical expansion.
            let mut dnf = decompose(r);
            dnf.extend(decompose_negated(l));
            dnf
        }
        Formula::Equiv(l, r) => {
            // ¬(l <-> r) is ¬(l -> r) \/ ¬(r -> l)
            let mut dnf = decompose(r);
            dnf.extend(decompose_negated(l));
            dnf.extend(decompose(l));
            dnf.extend(decompose_negated(r));
            dnf
        }
    }
}

/// Returns `true` if and only if no two facts of the conjunction contradict.
pub fn consistent<T>(conjunction: &[Fact<T>]) -> bool
where
    T: LabelType,
{
    conjunction
        .iter()
        .enumerate()
        .all(|(i, fact)| !conjunction[i + 1..].iter().any(|other| fact.contradicts(other)))
}

/// Returns `true` if and only if every conjunction of the DNF is inconsistent.
///
/// The empty DNF denotes `false` and is impossible.
///
/// # Example
///
/// ```
/// # use proarg::{decompose, impossible, Formula};
/// assert!(impossible(&decompose(&Formula::<&str>::False)));
/// assert!(!impossible(&decompose(&Formula::<&str>::True)));
/// ```
pub fn impossible<T>(dnf: &[Conjunction<T>]) -> bool
where
    T: LabelType,
{
    dnf.iter().all(|conjunction| !consistent(conjunction))
}

/// The consistent conjunctions of the DNF of a formula.
///
/// These are the situations in which the formula can actually hold.
///
/// # Example
///
/// ```
/// # use proarg::{cases, Fact, Formula};
/// let contradiction = Formula::var("a").and(Formula::var("a").not());
/// assert!(cases(&contradiction).is_empty());
/// ```
pub fn cases<T>(formula: &Formula<T>) -> Dnf<T>
where
    T: LabelType,
{
    decompose(formula)
        .into_iter()
        .filter(|conjunction| consistent(conjunction))
        .collect()
}
