mod client;
mod errors;
pub mod ordering;
mod query;
pub mod types;

pub use self::client::{ApiResponse, Client, Request};
pub use self::errors::Error;
pub use self::ordering::{check_order, OrderedRecord, Violation, ViolationKind};
pub use self::query::{
    serialize, ParamKind, ParamSpec, ParamValue, QueryPair, QueryParams, TransactionQuery,
};
