use super::defeat::DefeatComputer;
use super::Preference;
use crate::dnf::{cases, Dnf};
use crate::utils::LabelType;
use crate::{pro_contra, Argument, Formula, Support};

/// A winning argument with the verdict on its own support.
///
/// Winners keep their full recursive decomposition so a caller can walk the whole
/// explanation tree; assumptions and open branches terminate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Winner<T>
where
    T: LabelType,
{
    /// A premise that decided its sub-question on its own.
    Assumption(Formula<T>),
    /// An argued premise, with its sub-support partitioned in turn.
    Argued(Formula<T>, Box<WinnersLosers<T>>),
    /// Disjuncts left open; deciding their atoms would close the branch.
    Open(Dnf<T>),
}

/// The winning arguments of both sides of a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerSupport<T>
where
    T: LabelType,
{
    /// The surviving arguments supporting the question.
    pub pro: Vec<Winner<T>>,
    /// The surviving arguments opposing the question.
    pub contra: Vec<Winner<T>>,
}

/// The partition of a support into winners and losers.
///
/// Losers are kept as plain arguments for reporting; their sub-supports are not
/// analyzed any further.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnersLosers<T>
where
    T: LabelType,
{
    /// The arguments surviving the attacks of the opposite side.
    pub winners: WinnerSupport<T>,
    /// The arguments put out of play.
    pub losers: Support<T>,
}

impl<T> Default for WinnersLosers<T>
where
    T: LabelType,
{
    fn default() -> Self {
        WinnersLosers {
            winners: WinnerSupport {
                pro: Vec::new(),
                contra: Vec::new(),
            },
            losers: Support {
                pro: Vec::new(),
                contra: Vec::new(),
            },
        }
    }
}

/// Partitions a support into winners and losers under a preference.
///
/// An argument loses if it is defeated or rebutted by the opposite side; the
/// others win and have their own supports partitioned recursively.
pub fn winners_losers<T, P>(preference: &P, support: Support<T>) -> WinnersLosers<T>
where
    T: LabelType,
    P: Preference<T> + ?Sized,
{
    let mut computer = DefeatComputer::new(preference);
    let pro_lost: Vec<bool> = support
        .pro
        .iter()
        .map(|a| computer.is_defeated(a) || computer.is_rebutted(&support.contra, a))
        .collect();
    let contra_lost: Vec<bool> = support
        .contra
        .iter()
        .map(|a| computer.is_defeated(a) || computer.is_rebutted(&support.pro, a))
        .collect();
    let mut partition = WinnersLosers::default();
    for (argument, lost) in support.pro.into_iter().zip(pro_lost) {
        if lost {
            partition.losers.pro.push(argument);
        } else {
            partition.winners.pro.push(into_winner(preference, argument));
        }
    }
    for (argument, lost) in support.contra.into_iter().zip(contra_lost) {
        if lost {
            partition.losers.contra.push(argument);
        } else {
            partition
                .winners
                .contra
                .push(into_winner(preference, argument));
        }
    }
    partition
}

fn into_winner<T, P>(preference: &P, argument: Argument<T>) -> Winner<T>
where
    T: LabelType,
    P: Preference<T> + ?Sized,
{
    match argument {
        Argument::Assumption(premise) => Winner::Assumption(premise),
        Argument::Open(dnf) => Winner::Open(dnf),
        Argument::Argued(premise, support) => {
            Winner::Argued(premise, Box::new(winners_losers(preference, support)))
        }
    }
}

/// Builds and judges the arguments for and against a question.
///
/// This is the entry point of the engine: the question is put in disjunctive
/// normal form, argued from the information base, and the resulting support is
/// partitioned into winners and losers under the preference. An empty information
/// base yields an empty partition.
///
/// # Example
///
/// ```
/// # use proarg::{explanation, Formula, NoPreference, Winner};
/// let information = vec![
///     Formula::var("bird").implies(Formula::var("flies")),
///     Formula::var("bird"),
/// ];
/// let verdict = explanation(&NoPreference, &Formula::var("flies"), &information);
/// assert_eq!(1, verdict.winners.pro.len());
/// assert!(matches!(verdict.winners.pro[0], Winner::Argued(..)));
/// ```
pub fn explanation<T, P>(
    preference: &P,
    question: &Formula<T>,
    information: &[Formula<T>],
) -> WinnersLosers<T>
where
    T: LabelType,
    P: Preference<T> + ?Sized,
{
    match pro_contra(&cases(question), information) {
        Some(support) => winners_losers(preference, support),
        None => WinnersLosers::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoPreference, Ranking};

    fn var(name: &str) -> Formula<&str> {
        Formula::var(name)
    }

    #[test]
    fn test_empty_information_yields_empty_partition() {
        let verdict = explanation(&NoPreference, &var("q"), &[]);
        assert_eq!(WinnersLosers::default(), verdict);
    }

    #[test]
    fn test_mutual_rebuttal_without_preference_keeps_both_sides() {
        let verdict = explanation(&NoPreference, &var("p"), &[var("p"), var("p").not()]);
        assert_eq!(vec![Winner::Assumption(var("p"))], verdict.winners.pro);
        assert_eq!(
            vec![Winner::Assumption(var("p").not())],
            verdict.winners.contra
        );
        assert!(verdict.losers.pro.is_empty());
        assert!(verdict.losers.contra.is_empty());
    }

    #[test]
    fn test_ranked_premise_rebuts_its_negation() {
        let ranking = Ranking::new(vec![(2, var("p")), (1, var("p").not())]);
        let verdict = explanation(&ranking, &var("p"), &[var("p"), var("p").not()]);
        assert_eq!(vec![Winner::Assumption(var("p"))], verdict.winners.pro);
        assert!(verdict.winners.contra.is_empty());
        assert_eq!(
            vec![Argument::Assumption(var("p").not())],
            verdict.losers.contra
        );
    }

    #[test]
    fn test_winners_and_losers_are_disjoint() {
        let ranking = Ranking::new(vec![(2, var("p")), (1, var("p").not())]);
        let verdict = explanation(&ranking, &var("p"), &[var("p"), var("p").not()]);
        assert_eq!(1, verdict.winners.pro.len() + verdict.losers.pro.len());
        assert_eq!(
            1,
            verdict.winners.contra.len() + verdict.losers.contra.len()
        );
    }

    #[test]
    fn test_open_contra_branch_loses_to_concrete_pro() {
        let verdict = explanation(&NoPreference, &var("p"), &[var("p")]);
        assert_eq!(vec![Winner::Assumption(var("p"))], verdict.winners.pro);
        assert!(verdict.winners.contra.is_empty());
        assert_eq!(1, verdict.losers.contra.len());
        assert!(verdict.losers.contra[0].is_open());
    }

    #[test]
    fn test_winner_decomposition_is_carried_recursively() {
        let rule = var("a").implies(var("b"));
        let verdict = explanation(&NoPreference, &var("b"), &[rule.clone(), var("a")]);
        match &verdict.winners.pro[0] {
            Winner::Argued(premise, sub) => {
                assert_eq!(&rule, premise);
                assert_eq!(vec![Winner::Assumption(var("a"))], sub.winners.pro);
                assert!(sub.winners.contra.is_empty());
                assert_eq!(1, sub.losers.contra.len());
            }
            other => panic!("expected an argued winner, got {:?}", other),
        }
    }
}
