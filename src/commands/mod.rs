//! # Command Layer
//!
//! This module contains the core business logic of medz. Each operation
//! lives in its own submodule as a pure function, generic over the storage
//! backend and the notification service.
//!
//! Commands:
//! - Operate on `Medication`, `StatusRecord`, and other domain types
//! - Own the ordering inside an action (e.g. edit cancels the old reminder
//!   before scheduling the new one, then persists)
//! - Take wall-clock time as an explicit parameter where they need one, so
//!   the caller (API facade or test) supplies it
//! - Are completely UI-agnostic: no prompts, no formatting, no exit codes
//!
//! ## Command Modules
//!
//! - [`add`]: create a medication and schedule its daily reminder
//! - [`edit`]: replace a medication's fields and reschedule
//! - [`remove`]: delete a medication, cancel its reminder, cascade statuses
//! - [`record`]: store the answer to a dose prompt
//! - [`snooze`]: delay a dose prompt with a one-shot re-reminder
//! - [`scan`]: the periodic missed-dose check
//! - [`backfill`]: the daily "not yet" status backfill

pub mod add;
pub mod backfill;
pub mod edit;
pub mod record;
pub mod remove;
pub mod scan;
pub mod snooze;
