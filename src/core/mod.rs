pub mod ledger;
mod location;
mod option;

pub use ledger::LedgerSnapshot;
pub use location::Location;
pub use option::{FormatStyle, RecordOption};
