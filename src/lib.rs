//! pharmadir - Pharmacy directory with live opening status
//!
//! Lists the pharmacies of a locality, tells which are open at a given
//! instant from their weekly opening hours, and shows contact details.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PharmadirError;
