//! This module contains the argument trees and their resolution-style construction.

mod argument;
pub use argument::Argument;
pub use argument::Support;

mod builder;
pub use builder::arguments;
pub use builder::pro_contra;
