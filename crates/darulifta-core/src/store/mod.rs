mod accounts;
mod records;

pub use accounts::{AccountRegistry, Credentialed};
pub use records::RecordStore;
