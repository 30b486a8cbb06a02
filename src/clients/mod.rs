pub mod sns;

use anyhow::Error;
use async_trait::async_trait;

use crate::models::subscription::SubscriptionPage;

/// The external notification service. `create_topic` is idempotent by name:
/// requesting an already-existing topic returns its existing identifier.
#[async_trait]
pub trait NotificationChannel {
    async fn create_topic(&self, name: &str) -> Result<String, Error>;

    async fn list_subscriptions_by_topic(
        &self,
        topic_arn: &str,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, Error>;

    async fn subscribe(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<String, Error>;

    async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> Result<String, Error>;
}
