use crate::dnf::{dnf_to_string, Dnf};
use crate::utils::LabelType;
use crate::Formula;
use std::fmt::Display;

/// A justification structure built from premises for a sub-question.
///
/// Arguments form finite trees: an [Argued](Argument::Argued) node carries the
/// arguments exchanged about the residual sub-question its premise leaves open,
/// while [Assumption](Argument::Assumption) and [Open](Argument::Open) are leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Argument<T>
where
    T: LabelType,
{
    /// A premise deciding the current sub-question on its own.
    Assumption(Formula<T>),
    /// A relevant premise together with the arguments about the residual
    /// sub-question it does not decide.
    Argued(Formula<T>, Support<T>),
    /// The disjuncts of a sub-question that no premise advances.
    Open(Dnf<T>),
}

/// The arguments gathered for and against a sub-question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Support<T>
where
    T: LabelType,
{
    /// The arguments supporting the sub-question.
    pub pro: Vec<Argument<T>>,
    /// The arguments opposing the sub-question.
    pub contra: Vec<Argument<T>>,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the premise this argument is built on, or `None` for an open branch.
    ///
    /// # Example
    ///
    /// ```
    /// # use proarg::{Argument, Formula};
    /// let argument = Argument::Assumption(Formula::var("a"));
    /// assert_eq!(Some(&Formula::var("a")), argument.head());
    /// assert_eq!(None, Argument::<&str>::Open(vec![]).head());
    /// ```
    pub fn head(&self) -> Option<&Formula<T>> {
        match self {
            Argument::Assumption(premise) | Argument::Argued(premise, _) => Some(premise),
            Argument::Open(_) => None,
        }
    }

    /// Returns `true` if and only if this argument is an open branch.
    pub fn is_open(&self) -> bool {
        matches!(self, Argument::Open(_))
    }
}

impl<T> Support<T>
where
    T: LabelType,
{
    fn sorted_strings(arguments: &[Argument<T>]) -> String {
        let mut strings: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
        strings.sort_unstable();
        strings.join(", ")
    }
}

/// The canonical text form used to compare argument structures.
///
/// An assumption renders as its premise, an open branch as `open(dnf)`, and an
/// argued premise as `(pro: [..], contra: [..], premise)`. Nested argument strings
/// are sorted before joining, so the rendering does not depend on the order the
/// premises were supplied in.
impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Assumption(premise) => write!(f, "{}", premise),
            Argument::Open(dnf) => write!(f, "open({})", dnf_to_string(dnf)),
            Argument::Argued(premise, support) => write!(
                f,
                "(pro: [{}], contra: [{}], {})",
                Support::sorted_strings(&support.pro),
                Support::sorted_strings(&support.contra),
                premise,
            ),
        }
    }
}
