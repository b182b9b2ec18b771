//! # Domain Model: Medications and Dose Statuses
//!
//! This module defines the core data structures for medz: [`Medication`],
//! [`StatusRecord`], and their field enums.
//!
//! ## Wire Compatibility
//!
//! The serialized shape of these types is a compatibility surface, not an
//! implementation detail: the JSON arrays written to the storage slots are
//! read by the UI layer and were originally written by earlier app releases.
//! Concretely:
//!
//! - Field names are camelCase (`foodTiming`, `quantityType`,
//!   `notificationId`, `medicationId`).
//! - Enum values are the display strings the app always stored
//!   (`"Before Food"`, `"Pills"`, `"not yet"`, ...).
//! - Status dates are `YYYY-MM-DD`.
//!
//! ## Legacy Records
//!
//! The earliest releases persisted medications as bare
//! `{id, name, hour, minute}` objects. Those records must keep loading, so
//! every later field deserializes with a default: `Before Food`, `Pills`,
//! quantity `1`, no notification handle.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{MedzError, Result};
use crate::notify::NotificationHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodTiming {
    #[serde(rename = "Before Food")]
    BeforeFood,
    #[serde(rename = "After Food")]
    AfterFood,
}

impl Default for FoodTiming {
    fn default() -> Self {
        Self::BeforeFood
    }
}

impl fmt::Display for FoodTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeFood => write!(f, "Before Food"),
            Self::AfterFood => write!(f, "After Food"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityType {
    Pills,
    Syrup,
}

impl QuantityType {
    /// Unit implied by the quantity type: a count for pills, milliliters
    /// for syrup.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Pills => "pill(s)",
            Self::Syrup => "ml",
        }
    }
}

impl Default for QuantityType {
    fn default() -> Self {
        Self::Pills
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pills => write!(f, "Pills"),
            Self::Syrup => write!(f, "Syrup"),
        }
    }
}

/// One day's outcome for one medication. `NotYet` is the backfilled
/// "no answer recorded" state, distinct from an explicit `NotTaken`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseStatus {
    #[serde(rename = "not yet")]
    NotYet,
    #[serde(rename = "taken")]
    Taken,
    #[serde(rename = "not taken")]
    NotTaken,
}

impl Default for DoseStatus {
    fn default() -> Self {
        Self::NotYet
    }
}

impl fmt::Display for DoseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotYet => write!(f, "not yet"),
            Self::Taken => write!(f, "taken"),
            Self::NotTaken => write!(f, "not taken"),
        }
    }
}

fn default_quantity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    /// Local wall-clock reminder time, naive: no timezone or start-date
    /// semantics.
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub food_timing: FoodTiming,
    #[serde(default)]
    pub quantity_type: QuantityType,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Handle of the scheduled daily reminder, used to cancel it on
    /// edit/delete. The store persists whatever the caller supplies.
    #[serde(default)]
    pub notification_id: Option<NotificationHandle>,
}

impl Medication {
    pub fn new(draft: MedicationDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub fn with_id(id: Uuid, draft: MedicationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            hour: draft.hour,
            minute: draft.minute,
            food_timing: draft.food_timing,
            quantity_type: draft.quantity_type,
            quantity: draft.quantity,
            notification_id: None,
        }
    }

    /// Scheduled time-of-day. Out-of-range values from hand-edited slots
    /// clamp to midnight.
    pub fn scheduled_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Form fields for creating or editing a medication: everything except the
/// generated id and the notification handle.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationDraft {
    pub name: String,
    pub hour: u32,
    pub minute: u32,
    pub food_timing: FoodTiming,
    pub quantity_type: QuantityType,
    pub quantity: f64,
}

impl MedicationDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MedzError::InvalidMedication(
                "name must not be empty".to_string(),
            ));
        }
        if self.hour > 23 {
            return Err(MedzError::InvalidMedication(format!(
                "hour out of range: {}",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(MedzError::InvalidMedication(format!(
                "minute out of range: {}",
                self.minute
            )));
        }
        if !(self.quantity > 0.0) {
            return Err(MedzError::InvalidMedication(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub medication_id: Uuid,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub status: DoseStatus,
}

impl StatusRecord {
    pub fn new(medication_id: Uuid, date: NaiveDate, status: DoseStatus) -> Self {
        Self {
            medication_id,
            date,
            status,
        }
    }

    /// The backfill row inserted when a day starts with no recorded answer.
    pub fn not_yet(medication_id: Uuid, date: NaiveDate) -> Self {
        Self::new(medication_id, date, DoseStatus::NotYet)
    }

    /// Upsert identity: at most one record per (medication, date) pair.
    pub fn key(&self) -> (Uuid, NaiveDate) {
        (self.medication_id, self.date)
    }
}
