//! This module contains the argumentation semantics: preferences, defeat and
//! rebuttal, the winners/losers partitioning and the open-question extraction.

mod preference;
pub use preference::Comparison;
pub use preference::NoPreference;
pub use preference::Preference;
pub use preference::Ranking;

mod defeat;

mod winners_losers;
pub use winners_losers::explanation;
pub use winners_losers::winners_losers;
pub use winners_losers::Winner;
pub use winners_losers::WinnerSupport;
pub use winners_losers::WinnersLosers;

mod questions;
pub use questions::open_arguments;
pub use questions::questions;
