use anyhow::{Error, Result};
use tracing::{debug, info};

use crate::{
    clients::NotificationChannel,
    config::Config,
    models::{
        event::ButtonEvent,
        message::NotificationMessage,
        response::PublishAck,
        subscription::SubscriptionEntry,
    },
};

pub const EMAIL_PROTOCOL: &str = "email";

/// Runs one invocation end to end: resolve the topic, ensure the email
/// subscription, publish the event message. The first failing step aborts
/// the invocation; a topic created before a later failure is left as-is.
pub async fn process_event<C>(
    event: &ButtonEvent,
    config: &Config,
    channel: &C,
) -> Result<PublishAck, Error>
where
    C: NotificationChannel,
{
    info!(
        serial_number = %event.serial_number,
        click_type = %event.click_type,
        "Received button event"
    );

    let topic_arn = resolve_topic(channel, &config.topic_name).await?;

    ensure_email_subscription(channel, &topic_arn, &config.notification_email).await?;

    info!(topic_arn = %topic_arn, "Publishing to topic");

    let message = NotificationMessage::from_event(event);
    let message_id = channel
        .publish(&topic_arn, &message.subject, &message.body)
        .await?;

    info!(message_id = %message_id, "Notification published");

    Ok(PublishAck { message_id })
}

/// Produces the topic identifier for `topic_name`, creating the topic if it
/// does not exist. No existence check is made: the service returns the
/// existing identifier when the name is already taken.
pub async fn resolve_topic<C>(channel: &C, topic_name: &str) -> Result<String, Error>
where
    C: NotificationChannel,
{
    let topic_arn = channel.create_topic(topic_name).await?;

    info!(topic_arn = %topic_arn, "Resolved topic");

    Ok(topic_arn)
}

/// Guarantees an email subscription for `email` exists on the topic,
/// creating one only when the paginated listing holds no match. Two
/// invocations racing through the scan can both create one; that race is
/// accepted, not guarded.
pub async fn ensure_email_subscription<C>(
    channel: &C,
    topic_arn: &str,
    email: &str,
) -> Result<(), Error>
where
    C: NotificationChannel,
{
    if find_existing_subscription(channel, topic_arn, email)
        .await?
        .is_some()
    {
        debug!(endpoint = %email, "Subscription already exists, skipping creation");
        return Ok(());
    }

    channel.subscribe(topic_arn, EMAIL_PROTOCOL, email).await?;

    info!(endpoint = %email, topic_arn = %topic_arn, "Subscribed endpoint to topic");

    Ok(())
}

async fn find_existing_subscription<C>(
    channel: &C,
    topic_arn: &str,
    email: &str,
) -> Result<Option<SubscriptionEntry>, Error>
where
    C: NotificationChannel,
{
    let mut next_token: Option<String> = None;

    loop {
        let page = channel
            .list_subscriptions_by_topic(topic_arn, next_token)
            .await?;

        // Exact string equality: casing and whitespace differences in the
        // endpoint are treated as distinct addresses.
        let matched = page
            .subscriptions
            .into_iter()
            .find(|sub| sub.protocol == EMAIL_PROTOCOL && sub.endpoint == email);

        if matched.is_some() {
            return Ok(matched);
        }

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => return Ok(None),
        }
    }
}
