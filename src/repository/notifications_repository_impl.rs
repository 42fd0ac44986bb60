use super::{
    dto::{Notification, User},
    entity::{NotificationFindEntity, NotificationInsertEntity, UserEntity},
    Error, NotificationsRepository,
};
use crate::dto::{input, NotificationType};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures::TryStreamExt;
use mongodb::{error::ErrorKind, options::IndexOptions, Collection, Database, IndexModel};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_RECIPIENT_CREATED_AT: &str = "index_recipient_id_created_at";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(NOTIFICATIONS).await?;

        let collection = database.collection::<Document>(NOTIFICATIONS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_RECIPIENT_CREATED_AT.to_string()) {
            Self::create_recipient_created_at_index(&collection).await?;
            tracing::debug!("created index {NOTIFICATIONS}.{INDEX_NAME_RECIPIENT_CREATED_AT}");
        }

        Ok(Self { database })
    }

    async fn create_recipient_created_at_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "recipient_id": 1,
                "created_at": -1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_RECIPIENT_CREATED_AT.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(
        &self,
        recipient_id: Uuid,
        sender: User,
        created_at: OffsetDateTime,
        title: String,
        description: String,
        notification_type: NotificationType,
        action: String,
    ) -> Result<Notification, Error> {
        let insert_entity = NotificationInsertEntity {
            title,
            description,
            notification_type,
            action,
            recipient_id: recipient_id.into(),
            sender: UserEntity::from(&sender),
            read: false,
            deleted: false,
            created_at: DateTime::from(created_at),
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(Notification {
            id,
            title: insert_entity.title,
            description: insert_entity.description,
            notification_type: insert_entity.notification_type,
            action: insert_entity.action,
            recipient_id,
            sender,
            read: false,
            created_at,
        })
    }

    async fn find_many_by_recipient(
        &self,
        recipient_id: Uuid,
        read: Option<bool>,
        pagination: input::Pagination,
    ) -> Result<Vec<Notification>, Error> {
        let recipient_id = bson::Uuid::from(recipient_id);
        let mut filter = doc! {
            "recipient_id": recipient_id,
            "deleted": false,
        };
        if let Some(read) = read {
            filter.insert("read", read);
        }

        let cursor = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(filter)
            .sort(doc! {
                "created_at": -1
            })
            .skip((pagination.page_size * pagination.page_idx) as u64)
            .limit(pagination.page_size as i64)
            .await?;

        let notifications = cursor.map_ok(Notification::from).try_collect().await?;

        Ok(notifications)
    }

    async fn update_read(&self, id: ObjectId, recipient_id: Uuid, read: bool) -> Result<(), Error> {
        let recipient_id = bson::Uuid::from(recipient_id);

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "recipient_id": recipient_id,
                },
                doc! {
                    "$set": {
                        "read": read,
                    }
                },
            )
            .await?;

        // matched_count instead of modified_count because replacing
        // true with true doesn't count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_read_all(&self, recipient_id: Uuid) -> Result<(), Error> {
        let recipient_id = bson::Uuid::from(recipient_id);

        self.database
            .collection::<Document>(NOTIFICATIONS)
            .update_many(
                doc! {
                    "recipient_id": recipient_id,
                },
                doc! {
                    "$set": {
                        "read": true,
                    }
                },
            )
            .await?;

        Ok(())
    }

    async fn delete(&self, id: ObjectId, recipient_id: Uuid) -> Result<(), Error> {
        let recipient_id = bson::Uuid::from(recipient_id);

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "recipient_id": recipient_id,
                },
                doc! {
                    "$set": {
                        "deleted": true,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete_all(&self, recipient_id: Uuid) -> Result<(), Error> {
        let recipient_id = bson::Uuid::from(recipient_id);

        self.database
            .collection::<Document>(NOTIFICATIONS)
            .update_many(
                doc! {
                    "recipient_id": recipient_id,
                },
                doc! {
                    "$set": {
                        "deleted": true,
                    }
                },
            )
            .await?;

        Ok(())
    }
}
