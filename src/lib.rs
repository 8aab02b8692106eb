//! Proarg is a PROpositional defeasible ARGumentation engine.
//!
//! Given propositional formulas taken as defeasible premises, optionally ranked by
//! preference, and a question, the engine builds the arguments for and against the
//! question, decides which of them survive mutual attack, and names the atoms that
//! would still have to be decided to close the case.
//!
//! The pipeline is pure and deterministic: formulas are put in disjunctive normal
//! form over signed literals, arguments are constructed resolution-style from the
//! information base, and a defeat/rebuttal analysis under the preference partitions
//! them into winners and losers.
//!
//! # Example
//!
//! ```
//! use proarg::{explanation, questions, Formula, NoPreference, Winner};
//!
//! let information = vec![
//!     Formula::var("employed").implies(Formula::var("mayRequest")),
//!     Formula::var("employed"),
//! ];
//! let verdict = explanation(&NoPreference, &Formula::var("mayRequest"), &information);
//! assert_eq!(1, verdict.winners.pro.len());
//! assert!(matches!(verdict.winners.pro[0], Winner::Argued(..)));
//! assert!(questions(&verdict).is_empty());
//! ```

#![warn(missing_docs)]

mod language;
pub use language::Fact;
pub use language::Formula;
pub use language::Rulebase;

mod dnf;
pub use dnf::cases;
pub use dnf::combine;
pub use dnf::consistent;
pub use dnf::consistent_cases;
pub use dnf::decompose;
pub use dnf::dnf_to_string;
pub use dnf::impossible;
pub use dnf::negate;
pub use dnf::Conjunction;
pub use dnf::Dnf;

mod arguments;
pub use arguments::arguments;
pub use arguments::pro_contra;
pub use arguments::Argument;
pub use arguments::Support;

mod semantics;
pub use semantics::explanation;
pub use semantics::open_arguments;
pub use semantics::questions;
pub use semantics::winners_losers;
pub use semantics::Comparison;
pub use semantics::NoPreference;
pub use semantics::Preference;
pub use semantics::Ranking;
pub use semantics::Winner;
pub use semantics::WinnerSupport;
pub use semantics::WinnersLosers;

mod io;
pub use io::read_formula;
pub use io::RulebaseReader;
pub use io::WarningHandler;

mod utils;
pub use utils::LabelType;
