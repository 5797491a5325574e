//! blockfall (workspace facade crate).
//!
//! Keeps the public `blockfall::{core,input,term,types}` module paths
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
