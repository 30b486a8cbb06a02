use serde::{Deserialize, Serialize};

/// Invocation result: the publish acknowledgment, forwarded unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishAck {
    pub message_id: String,
}
