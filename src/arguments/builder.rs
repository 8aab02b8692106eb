use super::{Argument, Support};
use crate::dnf::{cases, consistent_cases, negate, Dnf};
use crate::utils::LabelType;
use crate::Formula;

/// Builds the arguments for and against a question stated as a DNF.
///
/// Returns `None` when neither side can put forward anything, which happens
/// exactly when the information base is empty.
///
/// # Example
///
/// ```
/// # use proarg::{cases, pro_contra, Formula};
/// let question = cases(&Formula::var("a"));
/// let information = vec![Formula::var("a"), Formula::var("a").not()];
/// let support = pro_contra(&question, &information).unwrap();
/// assert_eq!(1, support.pro.len());
/// assert_eq!(1, support.contra.len());
/// ```
pub fn pro_contra<T>(question: &Dnf<T>, information: &[Formula<T>]) -> Option<Support<T>>
where
    T: LabelType,
{
    let pro = arguments(question, information);
    let contra = arguments(&negate(question), information);
    if pro.is_empty() && contra.is_empty() {
        None
    } else {
        Some(Support { pro, contra })
    }
}

/// Builds the arguments establishing a question stated as a DNF.
///
/// Each premise is examined in turn against the negated question:
/// a premise excluding every combined case is decisive and yields an
/// [Assumption](Argument::Assumption); a premise excluding some cases leaves a
/// residual question that is argued recursively without it, yielding an
/// [Argued](Argument::Argued) node; a premise excluding nothing is passed over.
///
/// With premises at hand but none of them arguing the question, the question
/// itself is reported as a single [Open](Argument::Open) branch. An empty
/// information base yields no argument at all.
pub fn arguments<T>(question: &Dnf<T>, information: &[Formula<T>]) -> Vec<Argument<T>>
where
    T: LabelType,
{
    if information.is_empty() {
        return Vec::new();
    }
    let negated_question = negate(question);
    let mut found = Vec::new();
    for (index, premise) in information.iter().enumerate() {
        let premise_cases = cases(premise);
        let mut residual = consistent_cases(&premise_cases, &negated_question);
        residual.extend(consistent_cases(&negated_question, &premise_cases));
        if residual.len() >= premise_cases.len() * negated_question.len() {
            // the premise excludes no combined case
            continue;
        }
        if residual.is_empty() {
            found.push(Argument::Assumption(premise.clone()));
            continue;
        }
        let mut remaining = information.to_vec();
        remaining.remove(index);
        if let Some(support) = pro_contra(&negate(&residual), &remaining) {
            found.push(Argument::Argued(premise.clone(), support));
        }
    }
    if found.is_empty() {
        return vec![Argument::Open(question.clone())];
    }
    found
}
