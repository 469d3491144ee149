//! FILENAME: nodes/src/node.rs
//! PURPOSE: Defines the expression tree produced by the formula parser.
//! CONTEXT: The parser compiles a formula string into this tree, and the
//! reactive evaluator traverses it against live data. Nodes are built
//! strictly bottom-up through the typed constructors below, so every
//! non-leaf node's children are already fully typed, and nothing is
//! mutated after construction.
//!
//! NODE CATEGORIES:
//! - Injectors: leaves that supply a value (constants, bound variables)
//! - Operators: arithmetic, negation, and the ternary conditional
//! - Comparators: relational tests, always boolean-valued

use serde::{Deserialize, Serialize};

use crate::datatype::{Datatype, TypeError};

/// A constant leaf value: an anonymous numeric literal or a variable
/// binding supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub datatype: Datatype,
    pub value: f64,
}

impl Constant {
    pub fn new(datatype: Datatype, value: f64) -> Self {
        Constant { datatype, value }
    }

    /// An anonymous literal. Literals carry the widest numeric datatype.
    pub fn number(value: f64) -> Self {
        Constant {
            datatype: Datatype::Number,
            value,
        }
    }
}

/// Arithmetic node tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl ArithmeticOp {
    pub fn tag(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "Add",
            ArithmeticOp::Subtract => "Subtract",
            ArithmeticOp::Multiply => "Multiply",
            ArithmeticOp::Divide => "Divide",
            ArithmeticOp::Power => "Power",
        }
    }
}

/// Comparator node tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorOp {
    IsEqualTo,
    IsUnequalTo,
    IsLessThan,
    IsNoMoreThan,
    IsMoreThan,
    IsNoLessThan,
}

impl ComparatorOp {
    pub fn tag(self) -> &'static str {
        match self {
            ComparatorOp::IsEqualTo => "IsEqualTo",
            ComparatorOp::IsUnequalTo => "IsUnequalTo",
            ComparatorOp::IsLessThan => "IsLessThan",
            ComparatorOp::IsNoMoreThan => "IsNoMoreThan",
            ComparatorOp::IsMoreThan => "IsMoreThan",
            ComparatorOp::IsNoLessThan => "IsNoLessThan",
        }
    }
}

/// Node categories as seen by the reactive evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeCategory {
    Injector,
    Operator,
    Comparator,
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeCategory::Injector => write!(f, "injector"),
            NodeCategory::Operator => write!(f, "operator"),
            NodeCategory::Comparator => write!(f, "comparator"),
        }
    }
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A leaf supplying a value into the tree.
    Constant(Constant),

    /// A binary arithmetic operation. Its datatype is the unification of
    /// the operand datatypes.
    Arithmetic {
        op: ArithmeticOp,
        datatype: Datatype,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// A relational test. Operand datatypes must agree, but the node
    /// itself is always boolean-valued.
    Comparator {
        op: ComparatorOp,
        datatype: Datatype,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Unary numeric negation.
    Negate { datatype: Datatype, operand: Box<Node> },

    /// A conditional. Its datatype is the unification of the two branch
    /// datatypes; the condition's truthiness is left to the evaluator.
    Ternary {
        datatype: Datatype,
        condition: Box<Node>,
        if_true: Box<Node>,
        if_false: Box<Node>,
    },
}

impl Node {
    /// Builds an arithmetic node, unifying the operand datatypes.
    pub fn arithmetic(op: ArithmeticOp, left: Node, right: Node) -> Result<Node, TypeError> {
        let datatype = left.datatype().unify(right.datatype())?;
        Ok(Node::Arithmetic {
            op,
            datatype,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Builds a comparator node. The operands must unify (a comparator
    /// output cannot be compared against a number), but the result is
    /// always boolean regardless of the operand datatypes.
    pub fn comparator(op: ComparatorOp, left: Node, right: Node) -> Result<Node, TypeError> {
        left.datatype().unify(right.datatype())?;
        Ok(Node::Comparator {
            op,
            datatype: Datatype::Boolean,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Builds a negation node around a numeric operand.
    pub fn negate(operand: Node) -> Result<Node, TypeError> {
        let datatype = operand.datatype();
        if !datatype.is_numeric() {
            return Err(TypeError::NonNumericOperand { found: datatype });
        }
        Ok(Node::Negate {
            datatype,
            operand: Box::new(operand),
        })
    }

    /// Builds a ternary node, unifying the branch datatypes.
    pub fn ternary(condition: Node, if_true: Node, if_false: Node) -> Result<Node, TypeError> {
        let datatype = if_true.datatype().unify(if_false.datatype())?;
        Ok(Node::Ternary {
            datatype,
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        })
    }

    /// The node's tag as the evaluator names it ("Add", "IsEqualTo", ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Constant(_) => "Constant",
            Node::Arithmetic { op, .. } => op.tag(),
            Node::Comparator { op, .. } => op.tag(),
            Node::Negate { .. } => "Negate",
            Node::Ternary { .. } => "Ternary",
        }
    }

    /// The node's category: injector, operator, or comparator.
    pub fn category(&self) -> NodeCategory {
        match self {
            Node::Constant(_) => NodeCategory::Injector,
            Node::Arithmetic { .. } => NodeCategory::Operator,
            Node::Comparator { .. } => NodeCategory::Comparator,
            Node::Negate { .. } => NodeCategory::Operator,
            Node::Ternary { .. } => NodeCategory::Operator,
        }
    }

    /// The node's resolved datatype.
    pub fn datatype(&self) -> Datatype {
        match self {
            Node::Constant(constant) => constant.datatype,
            Node::Arithmetic { datatype, .. } => *datatype,
            Node::Comparator { datatype, .. } => *datatype,
            Node::Negate { datatype, .. } => *datatype,
            Node::Ternary { datatype, .. } => *datatype,
        }
    }
}
