//! Controller de disponibilidad
//!
//! Orquesta la consulta: valida las fechas de entrada, pide el snapshot al
//! almacén inyectado y devuelve el resultado del estimador tal cual.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::availability_dto::AvailabilityResponse;
use crate::repositories::availability_repository::{AvailabilityRepository, AvailabilityStore};
use crate::services::availability_service::AvailabilityService;
use crate::utils::errors::{availability_check_failed, not_found_error, AppError};
use crate::utils::validation::{validate_datetime, validate_uuid};

pub struct AvailabilityController<S: AvailabilityStore> {
    store: S,
    service: AvailabilityService,
}

impl AvailabilityController<AvailabilityRepository> {
    pub fn new(pool: PgPool, avg_cancellation_rate: f64) -> Self {
        Self::with_store(AvailabilityRepository::new(pool), avg_cancellation_rate)
    }
}

impl<S: AvailabilityStore> AvailabilityController<S> {
    pub fn with_store(store: S, avg_cancellation_rate: f64) -> Self {
        Self {
            store,
            service: AvailabilityService::new(avg_cancellation_rate),
        }
    }

    /// Comprobar disponibilidad de un vehículo para [start_date, end_date].
    ///
    /// Las fechas que no parsean fallan con InvalidInput; el vehículo
    /// inexistente con NotFound; cualquier fallo inesperado del almacén se
    /// envuelve como AvailabilityCheckFailed conservando la causa.
    pub async fn check_availability(
        &self,
        vehicle_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<AvailabilityResponse, AppError> {
        let vehicle_id = validate_uuid(vehicle_id)
            .map_err(|_| AppError::InvalidInput(format!("Invalid vehicle id '{}'", vehicle_id)))?;

        let start = validate_datetime(start_date).map_err(|_| {
            AppError::InvalidInput(format!("Invalid date format '{}'", start_date))
        })?;
        let end = validate_datetime(end_date)
            .map_err(|_| AppError::InvalidInput(format!("Invalid date format '{}'", end_date)))?;

        // Validación de la capa API, previa al estimador
        let now = Utc::now();
        if start < now {
            return Err(AppError::BadRequest(
                "Start date cannot be in the past".to_string(),
            ));
        }
        if end <= start {
            return Err(AppError::BadRequest(
                "End date must be after start date".to_string(),
            ));
        }

        let snapshot = self
            .store
            .fetch_vehicle_with_overlap(vehicle_id, start, end)
            .await
            .map_err(availability_check_failed)?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        Ok(self.service.estimate(&snapshot, start, end, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::availability_dto::AvailabilityStatus;
    use crate::models::availability::{BookingWindow, VehicleAvailabilitySnapshot};
    use async_trait::async_trait;
    use chrono::{DateTime, Duration};
    use uuid::Uuid;

    /// Almacén en memoria para ejercitar el controller sin PostgreSQL
    struct FakeStore {
        snapshot: Option<VehicleAvailabilitySnapshot>,
        fail: bool,
    }

    #[async_trait]
    impl AvailabilityStore for FakeStore {
        async fn fetch_vehicle_with_overlap(
            &self,
            vehicle_id: Uuid,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<Option<VehicleAvailabilitySnapshot>, AppError> {
            if self.fail {
                return Err(AppError::Internal("storage exploded".to_string()));
            }
            Ok(self.snapshot.clone().map(|mut s| {
                s.vehicle_id = vehicle_id;
                s
            }))
        }
    }

    fn controller(store: FakeStore) -> AvailabilityController<FakeStore> {
        AvailabilityController::with_store(store, 0.15)
    }

    fn snapshot(quantity: i32, bookings: Vec<BookingWindow>) -> VehicleAvailabilitySnapshot {
        VehicleAvailabilitySnapshot {
            vehicle_id: Uuid::new_v4(),
            available_quantity: quantity,
            bookings,
            queue_entries: vec![],
        }
    }

    fn rfc3339_in_days(days: i64) -> String {
        (Utc::now() + Duration::days(days)).to_rfc3339()
    }

    #[tokio::test]
    async fn test_malformed_date_fails_with_invalid_input() {
        // Escenario E: fecha malformada, sin resultado parcial
        let ctrl = controller(FakeStore {
            snapshot: Some(snapshot(3, vec![])),
            fail: false,
        });

        let result = ctrl
            .check_availability(&Uuid::new_v4().to_string(), "not-a-date", &rfc3339_in_days(5))
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        let result = ctrl
            .check_availability(&Uuid::new_v4().to_string(), &rfc3339_in_days(2), "2026/01/01")
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_invalid_vehicle_id_fails_with_invalid_input() {
        let ctrl = controller(FakeStore {
            snapshot: Some(snapshot(3, vec![])),
            fail: false,
        });

        let result = ctrl
            .check_availability("not-a-uuid", &rfc3339_in_days(2), &rfc3339_in_days(5))
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_start_in_past_rejected_before_estimator() {
        let ctrl = controller(FakeStore {
            snapshot: Some(snapshot(3, vec![])),
            fail: false,
        });

        let result = ctrl
            .check_availability(
                &Uuid::new_v4().to_string(),
                &rfc3339_in_days(-1),
                &rfc3339_in_days(5),
            )
            .await;
        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Start date cannot be in the past"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_end_not_after_start_rejected() {
        let ctrl = controller(FakeStore {
            snapshot: Some(snapshot(3, vec![])),
            fail: false,
        });

        let result = ctrl
            .check_availability(
                &Uuid::new_v4().to_string(),
                &rfc3339_in_days(5),
                &rfc3339_in_days(2),
            )
            .await;
        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "End date must be after start date"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_vehicle_fails_with_not_found() {
        let ctrl = controller(FakeStore {
            snapshot: None,
            fail: false,
        });

        let result = ctrl
            .check_availability(
                &Uuid::new_v4().to_string(),
                &rfc3339_in_days(2),
                &rfc3339_in_days(5),
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_failure_wrapped_with_cause() {
        let ctrl = controller(FakeStore {
            snapshot: None,
            fail: true,
        });

        let result = ctrl
            .check_availability(
                &Uuid::new_v4().to_string(),
                &rfc3339_in_days(2),
                &rfc3339_in_days(5),
            )
            .await;
        match result {
            Err(AppError::AvailabilityCheckFailed { source }) => {
                assert!(source.to_string().contains("storage exploded"));
            }
            other => panic!("expected AvailabilityCheckFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_happy_path_returns_estimator_result_verbatim() {
        let ctrl = controller(FakeStore {
            snapshot: Some(snapshot(3, vec![])),
            fail: false,
        });

        let result = ctrl
            .check_availability(
                &Uuid::new_v4().to_string(),
                &rfc3339_in_days(2),
                &rfc3339_in_days(5),
            )
            .await
            .unwrap();

        assert_eq!(result.status, AvailabilityStatus::Available);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.available_units, 3);
        assert_eq!(result.message, "3 unit(s) available for direct booking");
    }
}
