use super::spec::{ParamKind, ParamSpec, ParamValue, QueryParams};

/// Filter parameters for the transaction-listing endpoint.
///
/// `customerId` is required by the remote API but not enforced here; the
/// server's own validation of missing or malformed parameters is part of
/// what the test suites exercise, so every value passes through unmodified.
#[derive(Debug, Clone)]
pub struct TransactionQuery {
    /// Id of the customer (a GUID on the wire).
    pub customer_id: Option<String>,
    /// If set, return only transactions of that category (1-20).
    pub category_id: Option<i64>,
    /// Include transactions with "Pending" status. Defaults to true.
    pub include_pending: bool,
    /// Include transactions of "Debit" type. Defaults to true.
    pub include_debit: bool,
    /// Include transactions of "Credit" type. Defaults to true.
    pub include_credit: bool,
    /// Include transactions from this date (inclusive), `YYYY-MM-DD`.
    pub from_date: Option<String>,
    /// Include transactions up to this date (inclusive), `YYYY-MM-DD`.
    pub to_date: Option<String>,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            customer_id: None,
            category_id: None,
            include_pending: true,
            include_debit: true,
            include_credit: true,
            from_date: None,
            to_date: None,
        }
    }
}

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("customer_id", Some("customerId"), ParamKind::Str),
    ParamSpec::new("category_id", Some("categoryId"), ParamKind::OptInt),
    ParamSpec::new("include_pending", Some("includePending"), ParamKind::Bool),
    ParamSpec::new("include_debit", Some("includeDebit"), ParamKind::Bool),
    ParamSpec::new("include_credit", Some("includeCredit"), ParamKind::Bool),
    ParamSpec::new("from_date", Some("fromDate"), ParamKind::Str),
    ParamSpec::new("to_date", Some("toDate"), ParamKind::Str),
];

impl QueryParams for TransactionQuery {
    fn specs() -> &'static [ParamSpec] {
        PARAMS
    }

    fn value(&self, field: &str) -> Option<ParamValue> {
        match field {
            "customer_id" => Some(ParamValue::Str(self.customer_id.clone())),
            "category_id" => Some(ParamValue::OptInt(self.category_id)),
            "include_pending" => Some(ParamValue::Bool(self.include_pending)),
            "include_debit" => Some(ParamValue::Bool(self.include_debit)),
            "include_credit" => Some(ParamValue::Bool(self.include_credit)),
            "from_date" => Some(ParamValue::Str(self.from_date.clone())),
            "to_date" => Some(ParamValue::Str(self.to_date.clone())),
            _ => None,
        }
    }
}

impl TransactionQuery {
    pub fn with_customer_id(mut self, customer_id: &str) -> Self {
        self.customer_id = Some(customer_id.to_string());
        self
    }

    pub fn with_category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_include_pending(mut self, include_pending: bool) -> Self {
        self.include_pending = include_pending;
        self
    }

    pub fn with_include_debit(mut self, include_debit: bool) -> Self {
        self.include_debit = include_debit;
        self
    }

    pub fn with_include_credit(mut self, include_credit: bool) -> Self {
        self.include_credit = include_credit;
        self
    }

    pub fn with_from_date(mut self, from_date: &str) -> Self {
        self.from_date = Some(from_date.to_string());
        self
    }

    pub fn with_to_date(mut self, to_date: &str) -> Self {
        self.to_date = Some(to_date.to_string());
        self
    }
}
