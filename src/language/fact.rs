use crate::utils::LabelType;
use std::fmt::Display;

/// A signed literal: a propositional variable asserted or denied.
///
/// Two facts contradict if and only if they name the same atom with opposite signs.
///
/// # Example
///
/// ```
/// # use proarg::Fact;
/// let asserted = Fact::Positive("rainy");
/// let denied = Fact::Negative("rainy");
/// assert!(asserted.contradicts(&denied));
/// assert!(!asserted.contradicts(&Fact::Positive("rainy")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fact<T>
where
    T: LabelType,
{
    /// The atom holds.
    Positive(T),
    /// The atom does not hold.
    Negative(T),
}

impl<T> Fact<T>
where
    T: LabelType,
{
    /// Returns the atom this fact is about, regardless of its sign.
    pub fn atom(&self) -> &T {
        match self {
            Fact::Positive(a) | Fact::Negative(a) => a,
        }
    }

    /// Returns the fact asserting the opposite.
    ///
    /// # Example
    ///
    /// ```
    /// # use proarg::Fact;
    /// assert_eq!(Fact::Negative("a"), Fact::Positive("a").negated());
    /// ```
    pub fn negated(&self) -> Fact<T> {
        match self {
            Fact::Positive(a) => Fact::Negative(a.clone()),
            Fact::Negative(a) => Fact::Positive(a.clone()),
        }
    }

    /// Returns `true` if and only if both facts name the same atom with opposite signs.
    pub fn contradicts(&self, other: &Fact<T>) -> bool {
        match (self, other) {
            (Fact::Positive(a), Fact::Negative(b)) | (Fact::Negative(a), Fact::Positive(b)) => {
                a == b
            }
            _ => false,
        }
    }
}

impl<T> Display for Fact<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fact::Positive(a) => write!(f, "{}", a),
            Fact::Negative(a) => write!(f, "¬{}", a),
        }
    }
}
