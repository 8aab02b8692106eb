use crate::semantics::Ranking;
use crate::utils::LabelType;
use crate::Formula;

/// The premises under deliberation, their optional ranks and the question at hand.
///
/// A rulebase is what the io layer produces and what a caller feeds to
/// [explanation](crate::explanation): the premises in declaration order form the
/// information base, and the ranked premises form a [Ranking].
///
/// Declaration order is preserved; it drives the order of the constructed arguments.
///
/// # Example
///
/// ```
/// # use proarg::{Formula, Rulebase};
/// let mut rulebase = Rulebase::new();
/// rulebase.add_premise(Formula::var("employed").implies(Formula::var("mayRequest")));
/// rulebase.add_premise(Formula::var("employed"));
/// rulebase.set_question(Formula::var("mayRequest"));
/// assert_eq!(2, rulebase.information().len());
/// ```
#[derive(Clone, Debug)]
pub struct Rulebase<T>
where
    T: LabelType,
{
    premises: Vec<Formula<T>>,
    ranks: Vec<(i64, Formula<T>)>,
    question: Option<Formula<T>>,
}

impl<T> Rulebase<T>
where
    T: LabelType,
{
    /// Builds an empty rulebase.
    pub fn new() -> Self {
        Rulebase {
            premises: Vec::new(),
            ranks: Vec::new(),
            question: None,
        }
    }

    /// Adds a premise at the end of the information base.
    ///
    /// Returns `false` if a structurally equal premise is already declared;
    /// in this case the rulebase is left unchanged.
    pub fn add_premise(&mut self, premise: Formula<T>) -> bool {
        if self.premises.contains(&premise) {
            return false;
        }
        self.premises.push(premise);
        true
    }

    /// Assigns a rank to an already-declared premise.
    ///
    /// Returns `false` if the premise is not declared or is already ranked;
    /// in this case the rulebase is left unchanged.
    pub fn set_rank(&mut self, rank: i64, premise: &Formula<T>) -> bool {
        if !self.premises.contains(premise) || self.ranks.iter().any(|(_, p)| p == premise) {
            return false;
        }
        self.ranks.push((rank, premise.clone()));
        true
    }

    /// Sets the question under deliberation.
    pub fn set_question(&mut self, question: Formula<T>) {
        self.question = Some(question);
    }

    /// Returns the premises in declaration order.
    pub fn information(&self) -> &[Formula<T>] {
        &self.premises
    }

    /// Returns the question, if one has been set.
    pub fn question(&self) -> Option<&Formula<T>> {
        self.question.as_ref()
    }

    /// Builds the preference induced by the declared ranks.
    pub fn ranking(&self) -> Ranking<T> {
        Ranking::new(self.ranks.clone())
    }
}

impl<T> Default for Rulebase<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}
