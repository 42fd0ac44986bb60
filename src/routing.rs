use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{
        connections_service::ConnectionsService, notifications_service::NotificationsService,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{sse::Sse, IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use bson::oid::ObjectId;
use futures::stream;
use std::sync::Arc;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route(
            "/api/v1/user/:user_id/notification/subscribe",
            get(subscribe),
        )
        .route(
            "/api/v1/user/:user_id/notification",
            get(get_unread_notifications).post(create_notification),
        )
        .route(
            "/api/v1/user/:user_id/notification/read",
            get(get_read_notifications),
        )
        .route(
            "/api/v1/user/:user_id/notification/all",
            get(get_all_notifications),
        )
        .route(
            "/api/v1/user/:user_id/notification/read-all",
            post(mark_all_as_read),
        )
        .route(
            "/api/v1/user/:user_id/notification/:notification_id/read",
            post(mark_as_read),
        )
        .route(
            "/api/v1/user/:user_id/notification/:notification_id/unread",
            post(mark_as_unread),
        )
        .route(
            "/api/v1/user/:user_id/notification/:notification_id/delete",
            delete(delete_notification),
        )
        .route(
            "/api/v1/user/:user_id/notification/delete",
            delete(delete_all_notifications),
        )
}

async fn subscribe(
    State(connections_service): State<Arc<dyn ConnectionsService>>,
    Path(user_id): Path<Uuid>,
) -> Response {
    let events_rx = connections_service.subscribe(user_id).await;

    let events = stream::unfold(events_rx, |mut events_rx| async move {
        let event = events_rx.recv().await?;
        Some((event.into_event(), events_rx))
    });

    let mut response = Sse::new(events).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    // keep reverse proxies from buffering the stream
    headers.insert("X-Accel-Buffering", HeaderValue::from_static("no"));

    response
}

async fn create_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
    Json(form): Json<input::NotificationForm>,
) -> Result<(StatusCode, Json<output::NotificationId>), Error> {
    let notification_id = notifications_service
        .create_notification(user_id, form)
        .await?;

    Ok((StatusCode::CREATED, Json(notification_id)))
}

async fn get_unread_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<Vec<output::NotificationInfo>>, Error> {
    let notifications = notifications_service
        .find_unread_notifications(user_id, pagination)
        .await?;

    Ok(Json(notifications))
}

async fn get_read_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<Vec<output::NotificationInfo>>, Error> {
    let notifications = notifications_service
        .find_read_notifications(user_id, pagination)
        .await?;

    Ok(Json(notifications))
}

async fn get_all_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<Vec<output::NotificationInfo>>, Error> {
    let notifications = notifications_service
        .find_all_notifications(user_id, pagination)
        .await?;

    Ok(Json(notifications))
}

async fn mark_all_as_read(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    notifications_service.mark_all_as_read(user_id).await?;

    Ok(StatusCode::OK)
}

async fn mark_as_read(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path((user_id, notification_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, Error> {
    let notification_id = parse_notification_id(&notification_id)?;
    notifications_service
        .mark_as_read(notification_id, user_id)
        .await?;

    Ok(StatusCode::OK)
}

async fn mark_as_unread(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path((user_id, notification_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, Error> {
    let notification_id = parse_notification_id(&notification_id)?;
    notifications_service
        .mark_as_unread(notification_id, user_id)
        .await?;

    Ok(StatusCode::OK)
}

async fn delete_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path((user_id, notification_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, Error> {
    let notification_id = parse_notification_id(&notification_id)?;
    notifications_service
        .delete_notification(notification_id, user_id)
        .await?;

    Ok(StatusCode::OK)
}

async fn delete_all_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    notifications_service
        .delete_all_notifications(user_id)
        .await?;

    Ok(StatusCode::OK)
}

fn parse_notification_id(notification_id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(notification_id).map_err(|_| Error::NotificationNotExist)
}
