//! # Storage Layer
//!
//! This module defines the storage abstraction for medz. The
//! [`backend::StorageBackend`] trait handles raw slot I/O; [`MedStore`]
//! layers typed collections on top.
//!
//! ## Slots
//!
//! Durable state lives in three named slots, each holding one JSON
//! document. The slot names and payload shapes are shared with the UI layer
//! and with data written by earlier app releases, so they are fixed:
//!
//! ```text
//! medications.json          # JSON array of Medication records
//! medication_statuses.json  # JSON array of StatusRecord records
//! hasVisited.json           # "true" once the first-run flow has been seen
//! ```
//!
//! ## Whole-Collection Writes
//!
//! Every mutation is a full read-modify-write of one slot: load the array,
//! change it in memory, serialize, overwrite. There is no index, no
//! per-record write, and no optimistic concurrency token. Two interleaved
//! writers would be last-write-wins at collection granularity; medz assumes
//! a single user and strictly sequential operations within an action, so
//! this is a documented limitation, not a defect to engineer around.
//!
//! Individual slot writes are atomic (temp file + rename), so a crash
//! mid-write leaves the previous payload intact.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one file per slot.
//! - [`mem_backend::MemBackend`]: testing, no persistence.

pub mod backend;
pub mod fs_backend;
pub mod med_store;
pub mod mem_backend;

pub use med_store::MedStore;

/// Slot holding the medication collection.
pub const MEDICATIONS_SLOT: &str = "medications";

/// Slot holding the per-medication-per-day dose statuses.
pub const STATUSES_SLOT: &str = "medication_statuses";

/// Slot holding the first-run marker.
pub const HAS_VISITED_SLOT: &str = "hasVisited";
