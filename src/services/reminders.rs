// src/services/reminders.rs
use tracing::info;

use crate::message::{ReminderRequest, ReminderResponse, ReminderStatus};

pub const REMINDER_ACK: &str = "Reminder request received successfully.";

/// Log the submission and acknowledge it. Nothing is validated or stored.
pub fn record_reminder(reminder: &ReminderRequest) -> ReminderResponse {
    info!("--- New Vaccine Reminder Request Received ---");
    info!("  Parent's Name: {}", reminder.name);
    info!("  Child's DOB: {}", reminder.dob);
    info!("  WhatsApp Number: {}", reminder.phone);
    info!("-------------------------------------------");

    ReminderResponse {
        status: ReminderStatus::Success,
        message: REMINDER_ACK.to_string(),
    }
}
