use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct NotificationDto {
    pub id: i32,
    pub sender: String,
    pub message: String,
    pub style: String,
    pub display_timeout: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateNotificationDto {
    pub sender: String,
    pub message: String,
    pub style: String,
    pub display_timeout: i32,
    pub expires_at: Option<DateTime<Utc>>,
}
