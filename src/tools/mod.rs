//! Vaultix tools: the operation table and the dispatcher that executes it.
//!
//! Each tool is a static [`Operation`] record. Adding a tool means adding a
//! row to [`CATALOG`]; the dispatcher itself never changes.

mod catalog;
mod operation;
mod registry;

pub use catalog::CATALOG;
pub use operation::{BodyShape, ID_FIELD, OpMethod, Operation, Param, ParamKind, QueryDefault};
pub use registry::ToolRegistry;

#[cfg(test)]
mod dispatch_tests;
