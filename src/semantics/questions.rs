use super::{Winner, WinnersLosers};
use crate::utils::LabelType;
use permutator::CartesianProduct;

/// Collects the atom sets of the open branches reachable through winners.
///
/// Each [Open](Winner::Open) leaf of the winning part of the explanation tree
/// contributes the set of atoms its disjuncts mention; losers are not walked.
/// Atom sets are sorted by the atoms' text form and deduplicated.
///
/// # Example
///
/// ```
/// # use proarg::{explanation, open_arguments, Formula, NoPreference};
/// let verdict = explanation(&NoPreference, &Formula::var("y"), &[Formula::var("x")]);
/// assert_eq!(vec![vec!["y"], vec!["y"]], open_arguments(&verdict));
/// ```
pub fn open_arguments<T>(verdict: &WinnersLosers<T>) -> Vec<Vec<T>>
where
    T: LabelType,
{
    let mut branches = Vec::new();
    collect_open_branches(&verdict.winners.pro, &mut branches);
    collect_open_branches(&verdict.winners.contra, &mut branches);
    branches
}

fn collect_open_branches<T>(winners: &[Winner<T>], branches: &mut Vec<Vec<T>>)
where
    T: LabelType,
{
    for winner in winners {
        match winner {
            Winner::Assumption(_) => {}
            Winner::Open(dnf) => {
                let mut atoms: Vec<T> = dnf
                    .iter()
                    .flat_map(|conjunction| conjunction.iter().map(|fact| fact.atom().clone()))
                    .collect();
                atoms.sort_unstable_by_key(|atom| atom.to_string());
                atoms.dedup();
                branches.push(atoms);
            }
            Winner::Argued(_, sub) => {
                collect_open_branches(&sub.winners.pro, branches);
                collect_open_branches(&sub.winners.contra, branches);
            }
        }
    }
}

/// Enumerates the minimal atom sets whose determination would close the open branches.
///
/// One atom is picked from every open branch; each way of picking yields a
/// candidate atom set. Candidates are deduplicated and ordered by size, then
/// lexicographically on their text form, so the smallest ways to close the case
/// come first. Without open branches the case is closed and nothing is returned.
///
/// # Example
///
/// ```
/// # use proarg::{explanation, questions, Formula, NoPreference};
/// let verdict = explanation(&NoPreference, &Formula::var("y"), &[Formula::var("x")]);
/// assert_eq!(vec![vec!["y"]], questions(&verdict));
/// ```
pub fn questions<T>(verdict: &WinnersLosers<T>) -> Vec<Vec<T>>
where
    T: LabelType,
{
    let branches: Vec<Vec<T>> = open_arguments(verdict)
        .into_iter()
        .filter(|branch| !branch.is_empty())
        .collect();
    if branches.is_empty() {
        return Vec::new();
    }
    let domains: Vec<&[T]> = branches.iter().map(|branch| branch.as_slice()).collect();
    let mut combinations: Vec<Vec<T>> = domains
        .as_slice()
        .cart_prod()
        .map(|picks| {
            let mut atoms: Vec<T> = picks.iter().map(|atom| (*atom).clone()).collect();
            atoms.sort_unstable_by_key(|atom| atom.to_string());
            atoms.dedup();
            atoms
        })
        .collect();
    combinations.sort_by(|left, right| {
        left.len().cmp(&right.len()).then_with(|| {
            let left_strings: Vec<String> = left.iter().map(|a| a.to_string()).collect();
            let right_strings: Vec<String> = right.iter().map(|a| a.to_string()).collect();
            left_strings.cmp(&right_strings)
        })
    });
    combinations.dedup();
    combinations
}
