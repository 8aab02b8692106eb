//! This module contains the material used to state propositional knowledge.

mod fact;
pub use fact::Fact;

mod formula;
pub use formula::Formula;

mod rulebase;
pub use rulebase::Rulebase;
