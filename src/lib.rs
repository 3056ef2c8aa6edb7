//! Rxcheck — drug-pair interaction lookup with keyword-based severity tiers.
//!
//! The dataset is loaded once, every description is classified once, and
//! the resulting [`index::InteractionIndex`] is read-only for the rest of
//! the process. Any consuming layer receives the index as an explicit
//! value; there is no ambient singleton.

pub mod config;
pub mod dataset;
pub mod index;
pub mod severity;

pub use dataset::{load_rows, DataFormatError, RawInteraction};
pub use index::{InteractionIndex, InteractionRecord};
pub use severity::{classify, Severity};
