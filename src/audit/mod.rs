//! Audit logging system for warikan
//!
//! Records every mutation (members added, expenses added or removed, resets,
//! backups created, restored or deleted) in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information, and optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL).

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
