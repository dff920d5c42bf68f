//! Company dataset: the row model and the CSV loader.
//!
//! The dataset is fetched once per session and held in memory as an
//! immutable, ordered sequence of [`CompanyRow`]s.

mod loader;
mod row;

pub use loader::{load, parse_csv};
pub use row::{Column, CompanyRow};
