pub mod core;
pub mod error;
pub mod roster;
pub mod student;
pub mod utils;

pub use crate::roster::Roster;
pub use crate::student::{Labeled, Student};
