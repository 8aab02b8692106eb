//! Objects used to read formulas and rulebases from their text form.

mod formula_reader;
pub use formula_reader::read_formula;

mod rulebase_reader;
pub use rulebase_reader::RulebaseReader;
pub use rulebase_reader::WarningHandler;
