use crate::utils::LabelType;
use crate::Formula;

/// The outcome of comparing two premises under a preference relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// The left premise strictly outranks the right one.
    Greater,
    /// The right premise strictly outranks the left one.
    Lesser,
    /// Neither premise outranks the other.
    Incomparable,
}

/// A partial order over premises.
///
/// The preference decides which of two conflicting premises prevails; premises the
/// relation does not order are [Incomparable](Comparison::Incomparable) and defeat
/// neither way on its account.
pub trait Preference<T>
where
    T: LabelType,
{
    /// Compares two premises.
    fn compare(&self, left: &Formula<T>, right: &Formula<T>) -> Comparison;
}

/// The preference under which no premise outranks another.
///
/// # Example
///
/// ```
/// # use proarg::{Comparison, Formula, NoPreference, Preference};
/// let preference = NoPreference;
/// assert_eq!(
///     Comparison::Incomparable,
///     preference.compare(&Formula::var("a"), &Formula::var("b"))
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPreference;

impl<T> Preference<T> for NoPreference
where
    T: LabelType,
{
    fn compare(&self, _left: &Formula<T>, _right: &Formula<T>) -> Comparison {
        Comparison::Incomparable
    }
}

/// A preference built from ranked premises.
///
/// A premise strictly outranks another if and only if both are listed and the
/// first carries the higher rank. Premises left out of the ranking are
/// incomparable to everything.
///
/// # Example
///
/// ```
/// # use proarg::{Comparison, Formula, Preference, Ranking};
/// let exception = Formula::var("penguin").implies(Formula::var("flies").not());
/// let rule = Formula::var("bird").implies(Formula::var("flies"));
/// let ranking = Ranking::new(vec![(2, exception.clone()), (1, rule.clone())]);
/// assert_eq!(Comparison::Greater, ranking.compare(&exception, &rule));
/// assert_eq!(Comparison::Lesser, ranking.compare(&rule, &exception));
/// ```
#[derive(Clone, Debug)]
pub struct Ranking<T>
where
    T: LabelType,
{
    ranked: Vec<(i64, Formula<T>)>,
}

impl<T> Ranking<T>
where
    T: LabelType,
{
    /// Builds a ranking from rank/premise pairs.
    ///
    /// If a premise is listed several times, its first rank is the one considered.
    pub fn new(ranked: Vec<(i64, Formula<T>)>) -> Self {
        Ranking { ranked }
    }

    fn rank_of(&self, premise: &Formula<T>) -> Option<i64> {
        self.ranked
            .iter()
            .find(|(_, p)| p == premise)
            .map(|(rank, _)| *rank)
    }
}

impl<T> Preference<T> for Ranking<T>
where
    T: LabelType,
{
    fn compare(&self, left: &Formula<T>, right: &Formula<T>) -> Comparison {
        match (self.rank_of(left), self.rank_of(right)) {
            (Some(l), Some(r)) if l > r => Comparison::Greater,
            (Some(l), Some(r)) if l < r => Comparison::Lesser,
            _ => Comparison::Incomparable,
        }
    }
}
