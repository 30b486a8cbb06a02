use serde::{Deserialize, Serialize};

use crate::models::event::ButtonEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn from_event(event: &ButtonEvent) -> Self {
        Self {
            subject: format!(
                "Hello from your IoT Button {}: {}",
                event.serial_number, event.click_type
            ),
            body: format!(
                "{} -- processed by Lambda\nBattery voltage: {}",
                event.serial_number, event.battery_voltage
            ),
        }
    }
}
