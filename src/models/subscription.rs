use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionEntry {
    pub protocol: String,
    pub endpoint: String,
}

/// One page of a paginated subscription listing. A present `next_token`
/// means more pages remain.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionPage {
    pub subscriptions: Vec<SubscriptionEntry>,
    pub next_token: Option<String>,
}
