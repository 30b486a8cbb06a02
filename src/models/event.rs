use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Trigger payload sent for a physical button press.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonEvent {
    pub serial_number: String,
    pub battery_voltage: String,
    pub click_type: ClickType,
}

/// A LONG click is sent when the first press lasts longer than 1.5 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClickType {
    Single,
    Double,
    Long,
}

impl Display for ClickType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ClickType::Single => write!(f, "SINGLE"),
            ClickType::Double => write!(f, "DOUBLE"),
            ClickType::Long => write!(f, "LONG"),
        }
    }
}
