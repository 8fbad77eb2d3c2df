use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::CreateNotificationParams;

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateNotificationParams,
        created_at: DateTime<Utc>,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            recipient_id: ActiveValue::Set(params.recipient_id),
            sender: ActiveValue::Set(params.sender),
            message: ActiveValue::Set(params.message),
            style: ActiveValue::Set(params.style),
            display_timeout: ActiveValue::Set(params.display_timeout),
            picked_up: ActiveValue::Set(false),
            marked_for_deletion: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(params.expires_at),
            created_at: ActiveValue::Set(created_at),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets notifications of a recipient that are neither picked up nor marked for deletion,
    /// oldest first. Expiry is left to the caller.
    pub async fn get_unpicked_by_recipient(
        &self,
        recipient_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .filter(entity::notification::Column::PickedUp.eq(false))
            .filter(entity::notification::Column::MarkedForDeletion.eq(false))
            .order_by_asc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Marks a notification picked up if the stored row is still at `expected_version`.
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked and version incremented
    /// - `Err(DbErr::RecordNotUpdated)` - Row was changed or deleted since it was loaded
    pub async fn mark_picked_up(&self, id: i32, expected_version: i32) -> Result<(), DbErr> {
        let result = entity::prelude::Notification::update_many()
            .set(entity::notification::ActiveModel {
                picked_up: ActiveValue::Set(true),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Deletes notifications that expired at or before `now` or were marked for deletion.
    pub async fn delete_stale(&self, now: DateTime<Utc>) -> Result<DeleteResult, DbErr> {
        entity::prelude::Notification::delete_many()
            .filter(
                Condition::any()
                    .add(entity::notification::Column::MarkedForDeletion.eq(true))
                    .add(entity::notification::Column::ExpiresAt.lte(now)),
            )
            .exec(self.db)
            .await
    }
}
