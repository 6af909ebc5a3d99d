//! Side effects that follow a successful mutation.
//!
//! Neither service shares a transaction with the write it describes. Callers
//! await them after the primary change is stored, and a failure here is
//! logged without failing the request.

pub mod audit;
pub mod broadcast;
