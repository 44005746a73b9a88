mod transaction;

pub use self::transaction::Transaction;
