use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_topic_name")]
    pub topic_name: String,

    pub notification_email: String,
}

fn default_topic_name() -> String {
    "aws-iot-button-sns-topic".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
