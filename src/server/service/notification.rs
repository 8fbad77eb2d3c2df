use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::notification::{CreateNotificationDto, NotificationDto},
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::AppError,
        model::notification::{CreateNotificationParams, Notification},
        util::clock::Clock,
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Queues a notification for a user.
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The queued notification
    /// - `Err(AppError::NotFound)` - Recipient not found
    pub async fn create(
        &self,
        recipient_id: i32,
        dto: CreateNotificationDto,
    ) -> Result<NotificationDto, AppError> {
        if UserRepository::new(self.db)
            .get_by_id(recipient_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                recipient_id
            )));
        }

        let entity = NotificationRepository::new(self.db)
            .create(
                CreateNotificationParams {
                    recipient_id,
                    sender: dto.sender,
                    message: dto.message,
                    style: dto.style,
                    display_timeout: dto.display_timeout,
                    expires_at: dto.expires_at,
                },
                self.clock.now(),
            )
            .await?;

        Ok(Notification::from_entity(entity).into_dto())
    }

    /// Delivers pending notifications of a user and marks them picked up.
    ///
    /// A notification picked up by a concurrent request is skipped so each one is delivered
    /// once.
    ///
    /// # Returns
    /// - `Ok(Vec<NotificationDto>)` - Notifications delivered by this call, oldest first
    /// - `Err(AppError)` - Database error
    pub async fn pick_up(&self, recipient_id: i32) -> Result<Vec<NotificationDto>, AppError> {
        let now = self.clock.now();
        let repo = NotificationRepository::new(self.db);

        let pending = repo
            .get_unpicked_by_recipient(recipient_id)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .filter(|n| n.is_pending(now));

        let mut delivered = Vec::new();
        for notification in pending {
            match repo
                .mark_picked_up(notification.id, notification.version)
                .await
            {
                Ok(()) => delivered.push(notification.into_dto()),
                Err(DbErr::RecordNotUpdated) => {
                    tracing::debug!(
                        "Notification {} already picked up elsewhere",
                        notification.id
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(delivered)
    }
}
