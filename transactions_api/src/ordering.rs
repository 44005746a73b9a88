//! Validation of the documented sort contract for transaction lists.
//!
//! The remote API promises: all "Pending" transactions before all "Booked"
//! ones; within each status group, timestamps non-increasing; at equal
//! timestamps, merchant names ascending case-insensitively, with a missing
//! merchant name sorting before any present one. The nulls-first part of the
//! tie-break is what the API currently appears to do but has not been
//! confirmed with the API owners; [`ViolationKind::TieBreakOrder`] findings
//! on null merchants should be re-checked against the live service before
//! being treated as server bugs.

use chrono::{DateTime, FixedOffset};

use crate::types::Transaction;

/// Minimal projection of a result item, carrying only what ordering
/// validation needs.
#[derive(Debug, Clone)]
pub struct OrderedRecord {
    /// Identifier reported back in a [`Violation`].
    pub id: String,
    /// Status group key, expected to be "Pending" or "Booked" (any casing).
    pub status: String,
    pub timestamp: DateTime<FixedOffset>,
    /// Tie-break key at equal timestamps.
    pub merchant: Option<String>,
}

impl From<&Transaction> for OrderedRecord {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.transaction_id.clone(),
            status: tx.status.clone(),
            timestamp: tx.timestamp,
            merchant: tx.merchant_name.clone(),
        }
    }
}

/// The kind of ordering-contract breach found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The record's status is neither "Pending" nor "Booked".
    UnexpectedGroup { status: String },
    /// A pending record appeared after a booked one.
    GroupOrder,
    /// A timestamp increased within a status group.
    TimestampOrder,
    /// At equal timestamps, merchant names were not ascending
    /// (case-insensitive), or a named merchant preceded a null one.
    TieBreakOrder,
}

/// The first ordering-contract breach in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Position of the offending record in the input sequence.
    pub index: usize,
    /// Identifier of the offending record.
    pub record_id: String,
    pub kind: ViolationKind,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Group {
    Pending,
    Booked,
}

struct GroupState<'a> {
    timestamp: DateTime<FixedOffset>,
    merchant: Option<&'a str>,
}

/// Checks `records` against the documented sort contract, returning the
/// first violation found or `None` if the whole sequence conforms.
///
/// Pure and deterministic; suitable for running directly against synthetic
/// sequences.
pub fn check_order(records: &[OrderedRecord]) -> Option<Violation> {
    let mut seen_booked = false;
    let mut last_pending: Option<GroupState<'_>> = None;
    let mut last_booked: Option<GroupState<'_>> = None;

    for (index, record) in records.iter().enumerate() {
        let violation = |kind: ViolationKind| {
            Some(Violation {
                index,
                record_id: record.id.clone(),
                kind,
            })
        };

        let group = match record.status.to_lowercase().as_str() {
            "pending" => Group::Pending,
            "booked" => Group::Booked,
            _ => {
                return violation(ViolationKind::UnexpectedGroup {
                    status: record.status.clone(),
                })
            }
        };

        match group {
            Group::Pending if seen_booked => return violation(ViolationKind::GroupOrder),
            Group::Pending => {}
            Group::Booked => seen_booked = true,
        }

        let last = match group {
            Group::Pending => &mut last_pending,
            Group::Booked => &mut last_booked,
        };
        if let Some(prev) = last {
            if record.timestamp > prev.timestamp {
                return violation(ViolationKind::TimestampOrder);
            }
            if record.timestamp == prev.timestamp
                && !tie_break_ok(prev.merchant, record.merchant.as_deref())
            {
                return violation(ViolationKind::TieBreakOrder);
            }
        }
        *last = Some(GroupState {
            timestamp: record.timestamp,
            merchant: record.merchant.as_deref(),
        });
    }

    None
}

/// Tie-break rule at equal timestamps: nulls first, then case-insensitive
/// ascending by merchant name.
fn tie_break_ok(prev: Option<&str>, current: Option<&str>) -> bool {
    match (prev, current) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => a.to_lowercase() <= b.to_lowercase(),
    }
}
