use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_availability_check_contract() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/availability/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "vehicleId": "550e8400-e29b-41d4-a716-446655440000",
                "startDate": "2027-01-10T10:00:00Z",
                "endDate": "2027-01-12T10:00:00Z"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // El contrato de respuesta: status, percentage, canBookDirectly y message
    // siempre presentes
    let body = read_json(response).await;
    assert!(body["status"].is_string());
    assert!(body["percentage"].is_number());
    assert!(body["canBookDirectly"].is_boolean());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_availability_check_rejects_missing_fields() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/availability/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "vehicleId": "abc" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    // Body incompleto: no debe dar 500
    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.status().is_client_error());
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// Función helper para crear la app de test - misma forma de rutas que el
// servidor real, con handlers de prueba sin base de datos
fn create_test_app() -> Router {
    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct CheckBody {
        vehicle_id: String,
        start_date: String,
        end_date: String,
    }

    Router::new()
        .route(
            "/test",
            get(|| async { Json(json!({ "status": "ok", "message": "Vehicle Rental API funcionando correctamente" })) }),
        )
        .route(
            "/api/availability/check",
            post(|Json(_body): Json<CheckBody>| async {
                Json(json!({
                    "status": "AVAILABLE",
                    "percentage": 100,
                    "canBookDirectly": true,
                    "availableUnits": 2,
                    "queuePosition": null,
                    "returningVehicles": 0,
                    "message": "2 unit(s) available for direct booking"
                }))
            }),
        )
}
