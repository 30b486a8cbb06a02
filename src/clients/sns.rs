use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    clients::NotificationChannel,
    models::subscription::{SubscriptionEntry, SubscriptionPage},
};

#[derive(Clone, Debug)]
pub struct SnsClient {
    inner: aws_sdk_sns::Client,
}

impl SnsClient {
    pub fn new(inner: aws_sdk_sns::Client) -> Self {
        Self { inner }
    }

    pub async fn connect() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        info!("SNS client initialized");

        Self::new(aws_sdk_sns::Client::new(&aws_config))
    }
}

#[async_trait]
impl NotificationChannel for SnsClient {
    async fn create_topic(&self, name: &str) -> Result<String, Error> {
        let output = self.inner.create_topic().name(name).send().await?;

        match output.topic_arn() {
            Some(arn) => Ok(arn.to_string()),
            None => Err(anyhow!("Create topic returned no topic ARN")),
        }
    }

    async fn list_subscriptions_by_topic(
        &self,
        topic_arn: &str,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, Error> {
        debug!(topic_arn, "Listing subscriptions");

        let output = self
            .inner
            .list_subscriptions_by_topic()
            .topic_arn(topic_arn)
            .set_next_token(next_token)
            .send()
            .await?;

        let subscriptions = output
            .subscriptions()
            .iter()
            .map(|sub| SubscriptionEntry {
                protocol: sub.protocol().unwrap_or_default().to_string(),
                endpoint: sub.endpoint().unwrap_or_default().to_string(),
            })
            .collect();

        Ok(SubscriptionPage {
            subscriptions,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn subscribe(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<String, Error> {
        let output = self
            .inner
            .subscribe()
            .topic_arn(topic_arn)
            .protocol(protocol)
            .endpoint(endpoint)
            .send()
            .await?;

        // For email subscriptions this is "pending confirmation" until the
        // recipient confirms; request acceptance is enough here.
        match output.subscription_arn() {
            Some(arn) => Ok(arn.to_string()),
            None => Err(anyhow!("Subscribe returned no subscription ARN")),
        }
    }

    async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> Result<String, Error> {
        let output = self
            .inner
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await?;

        match output.message_id() {
            Some(message_id) => Ok(message_id.to_string()),
            None => Err(anyhow!("Publish returned no message id")),
        }
    }
}
