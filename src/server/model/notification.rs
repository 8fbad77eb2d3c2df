use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub recipient_id: i32,
    pub sender: String,
    pub message: String,
    pub style: String,
    /// Seconds the client should keep the notification on screen.
    pub display_timeout: i32,
    pub picked_up: bool,
    pub marked_for_deletion: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub version: i32,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            recipient_id: entity.recipient_id,
            sender: entity.sender,
            message: entity.message,
            style: entity.style,
            display_timeout: entity.display_timeout,
            picked_up: entity.picked_up,
            marked_for_deletion: entity.marked_for_deletion,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
            version: entity.version,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Whether the notification still needs to be delivered to its recipient.
    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        !self.picked_up && !self.marked_for_deletion && !self.is_expired(now)
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            sender: self.sender,
            message: self.message,
            style: self.style,
            display_timeout: self.display_timeout,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub recipient_id: i32,
    pub sender: String,
    pub message: String,
    pub style: String,
    pub display_timeout: i32,
    pub expires_at: Option<DateTime<Utc>>,
}
