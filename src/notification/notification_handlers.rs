use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use super::{
    notification_dto::{
        DispatchResponse, ListNotificationsQuery, MarkAllReadResponse, NotificationIntentRequest,
        NotificationMutationResponse, UnreadCountResponse,
    },
    notification_view::{category_options, CategoryOption, NotificationIntent, NotificationView},
};
use crate::{error::Result, extract::IdPath, state::AppState};

/// List notifications, filtered by category and search text
#[utoipa::path(
    get,
    path = "/api/notifications",
    params(ListNotificationsQuery),
    responses(
        (status = 200, description = "Filtered notifications with unread count", body = NotificationView),
        (status = 400, description = "Unknown category or overlong search")
    ),
    tag = "notifications"
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(params): Query<ListNotificationsQuery>,
) -> Result<Json<NotificationView>> {
    let query = params.into_query()?;
    let view = state.notification_service.list(&query).await;

    Ok(Json(view))
}

/// Number of unread notifications in the whole collection
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    responses(
        (status = 200, description = "Unread count", body = UnreadCountResponse)
    ),
    tag = "notifications"
)]
pub async fn get_unread_count(State(state): State<AppState>) -> Json<UnreadCountResponse> {
    Json(UnreadCountResponse {
        unread_count: state.notification_service.unread_count().await,
    })
}

/// Category buckets available to the filter
#[utoipa::path(
    get,
    path = "/api/notifications/categories",
    responses(
        (status = 200, description = "Filter categories", body = Vec<CategoryOption>)
    ),
    tag = "notifications"
)]
pub async fn get_categories() -> Json<Vec<CategoryOption>> {
    Json(category_options())
}

/// Mark notification as read
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = u32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Mark-read applied or ignored", body = NotificationMutationResponse),
        (status = 404, description = "Notification not found (strict id mode)")
    ),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    IdPath(notification_id): IdPath,
) -> Result<Json<NotificationMutationResponse>> {
    let response = state.notification_service.mark_as_read(notification_id).await?;

    Ok(Json(response))
}

/// Mark every notification as read
#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    responses(
        (status = 200, description = "All notifications marked as read", body = MarkAllReadResponse)
    ),
    tag = "notifications"
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
) -> Result<Json<MarkAllReadResponse>> {
    let response = state.notification_service.mark_all_as_read().await?;

    Ok(Json(response))
}

/// Delete a notification
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = u32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Delete applied or ignored", body = NotificationMutationResponse),
        (status = 404, description = "Notification not found (strict id mode)")
    ),
    tag = "notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    IdPath(notification_id): IdPath,
) -> Result<Json<NotificationMutationResponse>> {
    let response = state.notification_service.delete(notification_id).await?;

    Ok(Json(response))
}

/// Dispatch a notification page action
#[utoipa::path(
    post,
    path = "/api/notifications/intents",
    request_body = NotificationIntentRequest,
    responses(
        (status = 200, description = "Intent applied", body = DispatchResponse),
        (status = 400, description = "Missing notification id"),
        (status = 404, description = "Notification not found (strict id mode)")
    ),
    tag = "notifications"
)]
pub async fn dispatch_intent(
    State(state): State<AppState>,
    Json(payload): Json<NotificationIntentRequest>,
) -> Result<Json<DispatchResponse>> {
    let intent = NotificationIntent::try_from(payload)?;
    let response = state.notification_service.dispatch(intent).await?;

    Ok(Json(response))
}

/// Subscribe to notification changes via Server-Sent Events
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    responses(
        (status = 200, description = "SSE stream of notification changes")
    ),
    tag = "notifications"
)]
pub async fn notification_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let rx = state.notification_service.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let json = serde_json::to_string(&event).ok()?;
            Some(Ok(Event::default().event("notification").data(json)))
        }
        Err(lagged) => {
            tracing::warn!("Notification stream subscriber lagged: {}", lagged);
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
