mod transaction;

pub use transaction::{to_cents, Transaction, DATE_FORMAT, TIME_FORMAT};
