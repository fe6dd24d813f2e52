use crate::{
    equipment::{equipment_handlers, equipment_models::*},
    farm::{farm_handlers, farm_models::*},
    notification::{
        notification_dto::*,
        notification_handlers,
        notification_models::*,
        notification_view::{CategoryOption, NotificationChange, NotificationItem, NotificationView},
    },
    state::AppState,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notification_handlers::get_notifications,
        notification_handlers::get_unread_count,
        notification_handlers::get_categories,
        notification_handlers::mark_notification_read,
        notification_handlers::mark_all_notifications_read,
        notification_handlers::delete_notification,
        notification_handlers::dispatch_intent,
        notification_handlers::notification_stream,
        farm_handlers::get_overview,
        farm_handlers::get_crops,
        farm_handlers::get_crop,
        farm_handlers::get_soil,
        farm_handlers::get_alerts,
        farm_handlers::get_activities,
        farm_handlers::get_crop_health,
        farm_handlers::get_environment,
        farm_handlers::get_climate_resilience,
        equipment_handlers::get_equipment,
        equipment_handlers::get_equipment_summary,
        equipment_handlers::get_equipment_by_id,
    ),
    components(
        schemas(
            NotificationRecord,
            NotificationType,
            NotificationItem,
            NotificationView,
            NotificationChange,
            CategoryOption,
            UnreadCountResponse,
            NotificationMutationResponse,
            MarkAllReadResponse,
            IntentAction,
            NotificationIntentRequest,
            DispatchResponse,
            FarmOverview,
            HealthDistribution,
            Trend,
            CropMetric,
            SoilCondition,
            FieldAlert,
            AlertType,
            FarmActivity,
            CropHealthPoint,
            EnvironmentalReading,
            ClimateEvent,
            AdaptationMeasure,
            ClimateResilience,
            Equipment,
            EquipmentStatus,
            EquipmentType,
            EquipmentSummary,
        )
    ),
    tags(
        (name = "notifications", description = "Notification center endpoints"),
        (name = "farm", description = "Farm dashboard endpoints"),
        (name = "equipment", description = "Equipment endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let notification_routes = Router::new()
        .route("/", get(notification_handlers::get_notifications))
        .route("/unread-count", get(notification_handlers::get_unread_count))
        .route("/categories", get(notification_handlers::get_categories))
        .route("/stream", get(notification_handlers::notification_stream))
        .route("/read-all", post(notification_handlers::mark_all_notifications_read))
        .route("/intents", post(notification_handlers::dispatch_intent))
        .route("/:id/read", patch(notification_handlers::mark_notification_read))
        .route("/:id", delete(notification_handlers::delete_notification));

    let farm_routes = Router::new()
        .route("/overview", get(farm_handlers::get_overview))
        .route("/crops", get(farm_handlers::get_crops))
        .route("/crops/:id", get(farm_handlers::get_crop))
        .route("/soil", get(farm_handlers::get_soil))
        .route("/alerts", get(farm_handlers::get_alerts))
        .route("/activities", get(farm_handlers::get_activities))
        .route("/crop-health", get(farm_handlers::get_crop_health))
        .route("/environment", get(farm_handlers::get_environment))
        .route("/climate-resilience", get(farm_handlers::get_climate_resilience));

    let equipment_routes = Router::new()
        .route("/", get(equipment_handlers::get_equipment))
        .route("/summary", get(equipment_handlers::get_equipment_summary))
        .route("/:id", get(equipment_handlers::get_equipment_by_id));

    // Combine all routes
    let api_routes = Router::new()
        .nest("/notifications", notification_routes)
        .nest("/farm", farm_routes)
        .nest("/equipment", equipment_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
