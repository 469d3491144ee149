//! FILENAME: nodes/src/lib.rs
//! PURPOSE: Library root for the expression tree node model.
//! CONTEXT: This crate owns the data model shared between the formula
//! parser (which produces trees) and the reactive evaluator (which
//! consumes them). Keeping the model in its own crate lets the evaluator
//! depend on it without depending on the compiler.

pub mod datatype;
pub mod node;

// Re-export commonly used types for convenience
pub use datatype::{Datatype, TypeError};
pub use node::{ArithmeticOp, ComparatorOp, Constant, Node, NodeCategory};
