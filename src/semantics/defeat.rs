use super::{Comparison, Preference};
use crate::utils::LabelType;
use crate::Argument;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Evaluates defeat and rebuttal over an argument tree.
///
/// The two notions are mutually recursive: an argument is rebutted by a strictly
/// preferred opponent that is itself undefeated, and an argued premise is defeated
/// when its whole pro side is put down or when an unanswered contra argument
/// outranks it. Both recursions strictly descend into the finite tree.
///
/// Defeat status is cached per node for the lifetime of the computer, which is one
/// partitioning pass.
pub(crate) struct DefeatComputer<'a, T, P>
where
    T: LabelType,
    P: Preference<T> + ?Sized,
{
    preference: &'a P,
    defeated: HashMap<usize, bool>,
    labels: PhantomData<T>,
}

impl<'a, T, P> DefeatComputer<'a, T, P>
where
    T: LabelType,
    P: Preference<T> + ?Sized,
{
    pub(crate) fn new(preference: &'a P) -> Self {
        DefeatComputer {
            preference,
            defeated: HashMap::new(),
            labels: PhantomData,
        }
    }

    /// Checks whether an argument collapses on its own support.
    ///
    /// Assumptions and open branches carry no support to collapse and are never
    /// defeated by themselves.
    pub(crate) fn is_defeated(&mut self, argument: &Argument<T>) -> bool {
        let key = argument as *const Argument<T> as usize;
        if let Some(known) = self.defeated.get(&key) {
            return *known;
        }
        let defeated = match argument {
            Argument::Assumption(_) | Argument::Open(_) => false,
            Argument::Argued(head, support) => {
                let pro_collapses = support
                    .pro
                    .iter()
                    .all(|p| self.is_defeated(p) || self.is_rebutted(&support.contra, p));
                pro_collapses
                    || support.contra.iter().any(|c| {
                        !self.is_defeated(c)
                            && !self.is_rebutted(&support.pro, c)
                            && self.outranks(c.head(), head)
                    })
            }
        };
        self.defeated.insert(key, defeated);
        defeated
    }

    /// Checks whether an argument is rebutted by one of its opponents.
    ///
    /// A concrete argument is rebutted by an undefeated opponent whose head is
    /// strictly preferred to its own. An open branch has no head to weigh and is
    /// rebutted by any undefeated concrete opponent.
    pub(crate) fn is_rebutted(
        &mut self,
        opponents: &[Argument<T>],
        argument: &Argument<T>,
    ) -> bool {
        match argument.head() {
            None => opponents
                .iter()
                .any(|opponent| !opponent.is_open() && !self.is_defeated(opponent)),
            Some(head) => opponents.iter().any(|opponent| {
                !self.is_defeated(opponent) && self.outranks(opponent.head(), head)
            }),
        }
    }

    fn outranks(&self, left: Option<&crate::Formula<T>>, right: &crate::Formula<T>) -> bool {
        match left {
            Some(left) => self.preference.compare(left, right) == Comparison::Greater,
            None => false,
        }
    }
}
