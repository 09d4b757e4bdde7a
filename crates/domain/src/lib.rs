#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod athlete;
mod error;
mod exercise;
mod movement_pattern;
mod name;
mod plan;
mod selection;
mod split;
mod validation;
mod workout;

pub use athlete::*;
pub use catalog::Catalog;
pub use error::*;
pub use exercise::*;
pub use movement_pattern::*;
pub use name::*;
pub use plan::*;
pub use selection::*;
pub use split::*;
pub use validation::*;
pub use workout::*;
