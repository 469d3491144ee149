//! FILENAME: nodes/src/datatype.rs
//! PURPOSE: Datatype tags carried by expression tree nodes, and the rule
//! for combining them.
//! CONTEXT: Every node resolves its datatype at construction time. When two
//! subexpressions combine (arithmetic, comparison operands, ternary
//! branches), the combined datatype is computed here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Datatypes an expression tree node can resolve to.
/// Boolean only appears as the output of comparators; constants and
/// variable bindings are always numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Datatype {
    Number,
    Integer,
    Float,
    Boolean,
}

impl Datatype {
    /// Returns true for the datatypes a constant can carry.
    pub fn is_numeric(self) -> bool {
        matches!(self, Datatype::Number | Datatype::Integer | Datatype::Float)
    }

    /// Computes the combined datatype of two subexpressions.
    ///
    /// Identical datatypes are preserved unchanged. Mixing Integer and
    /// Float widens to Number, and Number absorbs the narrower numeric
    /// datatypes (numeric literals carry Number, so these pairs appear
    /// whenever a literal meets a typed binding). Pairing Boolean with a
    /// numeric datatype has no combined type and fails.
    pub fn unify(self, other: Datatype) -> Result<Datatype, TypeError> {
        use Datatype::*;

        match (self, other) {
            (left, right) if left == right => Ok(left),
            (Integer, Float) | (Float, Integer) => Ok(Number),
            (Number, Integer) | (Integer, Number) => Ok(Number),
            (Number, Float) | (Float, Number) => Ok(Number),
            (left, right) => Err(TypeError::Mismatch { left, right }),
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datatype::Number => write!(f, "Number"),
            Datatype::Integer => write!(f, "Integer"),
            Datatype::Float => write!(f, "Float"),
            Datatype::Boolean => write!(f, "Boolean"),
        }
    }
}

/// Typing errors raised while building nodes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Cannot combine datatypes {left} and {right}")]
    Mismatch { left: Datatype, right: Datatype },

    #[error("Unary operator requires a numeric operand, found {found}")]
    NonNumericOperand { found: Datatype },
}
