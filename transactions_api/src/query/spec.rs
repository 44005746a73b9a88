//! Declarative query-parameter serialization: a static [`ParamSpec`] table
//! per parameter object drives the translation into wire key/value pairs.

use url::Url;

use crate::errors::Error;

/// The declared kind of one query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// An optional string, passed through verbatim.
    Str,
    /// An optional integer, serialized in canonical decimal form.
    OptInt,
    /// A boolean, always emitted as the lowercase tokens `true`/`false`.
    Bool,
}

/// A runtime parameter value, as reported by a [`QueryParams`] impl.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(Option<String>),
    OptInt(Option<i64>),
    Bool(bool),
}

impl ParamValue {
    fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Str(_) => ParamKind::Str,
            ParamValue::OptInt(_) => ParamKind::OptInt,
            ParamValue::Bool(_) => ParamKind::Bool,
        }
    }
}

/// Static metadata binding one logical field to its wire-level query key.
///
/// Tables are declared once per parameter object type, in the order the
/// pairs should appear on the wire. Wire names must be unique within a table.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// The logical field identifier, matched by `QueryParams::value`.
    pub field: &'static str,
    /// The query key to emit. `None` falls back to `field`.
    pub wire_name: Option<&'static str>,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn new(field: &'static str, wire_name: Option<&'static str>, kind: ParamKind) -> Self {
        Self {
            field,
            wire_name,
            kind,
        }
    }

    /// The key emitted on the wire for this field.
    pub fn wire_key(&self) -> &'static str {
        self.wire_name.unwrap_or(self.field)
    }
}

/// One serialized key/value destined for a request's query string.
///
/// Values are *not* URL-encoded here; encoding is applied uniformly when the
/// pairs are appended to a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: String,
    pub value: String,
}

/// Trait implemented by all parameter objects. The static spec table plus
/// per-field value lookup is everything [`serialize`] needs.
pub trait QueryParams {
    /// The declaration-ordered parameter table for this type.
    fn specs() -> &'static [ParamSpec]
    where
        Self: Sized;

    /// Returns the current value of the named field, or `None` if the field
    /// is unknown to this object (a table/impl mismatch).
    fn value(&self, field: &str) -> Option<ParamValue>;

    /// Serializes this object and appends the resulting pairs to `url`,
    /// letting the URL layer apply percent-encoding uniformly.
    fn add_to_url(&self, url: &Url) -> Result<Url, Error>
    where
        Self: Sized,
    {
        let pairs = serialize(self)?;
        let mut url = url.clone();
        for pair in &pairs {
            url.query_pairs_mut().append_pair(&pair.key, &pair.value);
        }
        Ok(url)
    }
}

/// Walks `params` against its [`ParamSpec`] table and produces the ordered
/// query pairs.
///
/// Absent optionals and empty or whitespace-only strings are omitted
/// entirely. Booleans serialize as exactly `"true"`/`"false"`. Output order
/// follows table declaration order, so identical input always yields an
/// identical sequence with no duplicate keys.
pub fn serialize<Q: QueryParams>(params: &Q) -> Result<Vec<QueryPair>, Error> {
    let mut pairs = Vec::new();
    for spec in Q::specs() {
        let value = params.value(spec.field).ok_or(Error::InvalidFieldKind {
            field: spec.field,
            expected: spec.kind,
            actual: None,
        })?;
        if value.kind() != spec.kind {
            return Err(Error::InvalidFieldKind {
                field: spec.field,
                expected: spec.kind,
                actual: Some(value.kind()),
            });
        }
        let text = match value {
            ParamValue::Str(None) | ParamValue::OptInt(None) => continue,
            ParamValue::Str(Some(s)) => {
                if s.trim().is_empty() {
                    continue;
                }
                s
            }
            ParamValue::OptInt(Some(n)) => n.to_string(),
            ParamValue::Bool(b) => if b { "true" } else { "false" }.to_string(),
        };
        pairs.push(QueryPair {
            key: spec.wire_key().to_string(),
            value: text,
        });
    }
    Ok(pairs)
}
