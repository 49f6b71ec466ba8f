use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use super::clause::Match;

/// Comparison operand and row value union.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// A UTC timestamp.
    Time(DateTime<Utc>),
    /// A list operand, used with [`Match::In`].
    List(Vec<Value>),
}

impl Value {
    /// Compare this value to an operand using the given operator.
    /// Returns `None` for incompatible types or unsupported operations
    /// (e.g. Gt on bools); callers treat that as no-match.
    #[must_use]
    pub fn compare(&self, op: Match, operand: &Value) -> Option<bool> {
        match op {
            Match::All => Some(true),
            Match::In => match operand {
                Value::List(items) => Some(
                    items
                        .iter()
                        .any(|item| self.compare(Match::Eq, item) == Some(true)),
                ),
                _ => None,
            },
            Match::Eq | Match::Ne | Match::Gt | Match::Gte | Match::Lt | Match::Lte => {
                let ord = self.partial_cmp_value(operand)?;
                Some(ord_satisfies(op, ord))
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Bool(a), Value::Bool(b)) => {
                // Only equality comparisons are meaningful for bools;
                // callers should only use Eq/Ne here.
                Some(a.cmp(b))
            }
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Time(a), Value::Time(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Reduce an ordering-based operator to a test over the computed ordering.
/// `In` and `All` never reach here.
fn ord_satisfies(op: Match, ord: Ordering) -> bool {
    match op {
        Match::Eq => ord == Ordering::Equal,
        Match::Ne => ord != Ordering::Equal,
        Match::Gt => ord == Ordering::Greater,
        Match::Gte => ord != Ordering::Less,
        Match::Lt => ord == Ordering::Less,
        Match::Lte => ord != Ordering::Greater,
        Match::In | Match::All => false,
    }
}

// Structural equality with floats compared bitwise, so predicates can be
// deduplicated with set semantics and Hash stays consistent with Eq.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Int(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Bool(v) => v.hash(state),
            Value::String(v) => v.hash(state),
            Value::Time(v) => v.hash(state),
            Value::List(v) => v.hash(state),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

/// JSON scalars and arrays map onto their obvious counterparts; objects
/// have no operand form and collapse to `Null` (resolution rejects them
/// before conversion).
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null | serde_json::Value::Object(_) => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::Time(v) => write!(f, "{}", v.to_rfc3339()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
