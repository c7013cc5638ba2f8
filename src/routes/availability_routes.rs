use axum::{
    extract::State,
    routing::post,
    Json, Router,
};

use crate::controllers::availability_controller::AvailabilityController;
use crate::dto::availability_dto::{AvailabilityCheckRequest, AvailabilityResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_availability_router() -> Router<AppState> {
    Router::new().route("/check", post(check_availability))
}

async fn check_availability(
    State(state): State<AppState>,
    Json(request): Json<AvailabilityCheckRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller =
        AvailabilityController::new(state.pool.clone(), state.config.avg_cancellation_rate);
    let response = controller
        .check_availability(&request.vehicle_id, &request.start_date, &request.end_date)
        .await?;
    Ok(Json(response))
}
