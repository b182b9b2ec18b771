//! # Medz Architecture
//!
//! Medz is a **UI-agnostic medication-reminder core**: recurring daily
//! reminders, per-day dose statuses, and the periodic missed-dose scan,
//! persisted locally as JSON collections. The mobile screens, the platform
//! notification scheduler, and the OS background-task runner are
//! collaborators, not parts of this crate.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands                               │
//! │  - Injects local wall-clock time                           │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure business logic: add/edit/remove, record, snooze,   │
//! │    missed-dose scan, daily backfill                        │
//! │  - Owns action ordering (cancel-old → schedule-new →       │
//! │    persist)                                                │
//! └────────────────────────────────────────────────────────────┘
//!                    │                         │
//!                    ▼                         ▼
//! ┌─────────────────────────────┐  ┌───────────────────────────┐
//! │  Storage Layer (store/)     │  │  Notifier seam (notify.rs)│
//! │  - StorageBackend trait     │  │  - schedule_daily /       │
//! │  - FsBackend (production)   │  │    schedule_once_after /  │
//! │  - MemBackend (testing)     │  │    cancel                 │
//! └─────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, and never assumes a screen, a terminal, or a specific
//! notification platform. The same core serves the mobile shell it was
//! extracted from or any other front end.
//!
//! ## Scheduling Model
//!
//! Everything is synchronous and single-threaded; operations are strictly
//! sequential within one action. The shared resource is a handful of
//! whole-collection storage slots, so two interleaved callers are
//! last-write-wins at collection granularity; see the `store` module docs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types and their wire shapes
//! - [`notify`]: Notification-service seam and test notifier
//! - [`paths`]: Default data-directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod notify;
pub mod paths;
pub mod store;
