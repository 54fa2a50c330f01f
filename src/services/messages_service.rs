use crate::error::{Error, Result};
use crate::fallback::{Api, UpdateMethod};
use crate::models::{CreateMessage, Message};
use chrono::Utc;
use tracing::instrument;
use validator::Validate;

pub const FALLBACK_KEY: &str = "contactMessages";

#[derive(Clone)]
pub struct MessagesService {
    api: Api,
}

impl MessagesService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Message>> {
        self.api.get_list("/messages", FALLBACK_KEY).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Message> {
        let messages = self.get_all().await?;
        messages
            .into_iter()
            .find(|msg| msg.id.as_deref() == Some(id))
            .ok_or_else(|| Error::NotFound(format!("message '{}' not found", id)))
    }

    /// The timestamp and unread flag are stamped here; the contact form never
    /// supplies them.
    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn create(&self, data: CreateMessage) -> Result<Message> {
        data.validate()?;

        let message = Message {
            id: None,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            timestamp: Utc::now(),
            read: false,
        };
        self.api.create("/messages", FALLBACK_KEY, message).await
    }

    #[instrument(skip(self))]
    pub async fn mark_as_read(&self, id: &str) -> Result<Message> {
        let mut message = self.get_by_id(id).await?;
        message.read = true;
        self.api
            .update(
                UpdateMethod::Patch,
                &format!("/messages/{}/read", id),
                FALLBACK_KEY,
                id,
                message,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api
            .delete::<Message>(&format!("/messages/{}", id), FALLBACK_KEY, id)
            .await
    }
}
