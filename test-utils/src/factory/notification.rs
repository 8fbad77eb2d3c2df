//! Notification factory for creating test notification entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_id: i32,
    message: String,
    picked_up: bool,
    marked_for_deletion: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl<'a> NotificationFactory<'a> {
    /// Defaults to a pending notification that never expires.
    pub fn new(db: &'a DatabaseConnection, recipient_id: i32) -> Self {
        Self {
            db,
            recipient_id,
            message: "Test notification".to_string(),
            picked_up: false,
            marked_for_deletion: false,
            expires_at: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn picked_up(mut self, picked_up: bool) -> Self {
        self.picked_up = picked_up;
        self
    }

    pub fn marked_for_deletion(mut self, marked_for_deletion: bool) -> Self {
        self.marked_for_deletion = marked_for_deletion;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            recipient_id: ActiveValue::Set(self.recipient_id),
            sender: ActiveValue::Set("OpenSky".to_string()),
            message: ActiveValue::Set(self.message),
            style: ActiveValue::Set("info".to_string()),
            display_timeout: ActiveValue::Set(10),
            picked_up: ActiveValue::Set(self.picked_up),
            marked_for_deletion: ActiveValue::Set(self.marked_for_deletion),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_notification(
    db: &DatabaseConnection,
    recipient_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, recipient_id).build().await
}
