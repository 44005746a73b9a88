mod spec;
mod transaction;

pub use self::spec::{serialize, ParamKind, ParamSpec, ParamValue, QueryPair, QueryParams};
pub use self::transaction::TransactionQuery;
