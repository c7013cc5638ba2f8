//! Almacén de disponibilidad
//!
//! Lectura única de vehículo + reservas solapadas + entradas de cola.
//! El trait existe para poder ejercitar el controller sin PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::availability::{BookingWindow, QueueSlot, VehicleAvailabilitySnapshot};
use crate::utils::errors::AppError;

/// Contrato mínimo que necesita el estimador de disponibilidad
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Devuelve el snapshot del vehículo con sus reservas pre-filtradas al
    /// solape con [start, end] y su cola ordenada por posición ascendente,
    /// o None si el vehículo no existe.
    async fn fetch_vehicle_with_overlap(
        &self,
        vehicle_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<VehicleAvailabilitySnapshot>, AppError>;
}

pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for AvailabilityRepository {
    async fn fetch_vehicle_with_overlap(
        &self,
        vehicle_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<VehicleAvailabilitySnapshot>, AppError> {
        let vehicle: Option<(i32,)> =
            sqlx::query_as("SELECT available_quantity FROM vehicles WHERE id = $1")
                .bind(vehicle_id)
                .fetch_optional(&self.pool)
                .await?;

        let available_quantity = match vehicle {
            Some((quantity,)) => quantity,
            None => return Ok(None),
        };

        // Predicado de solape de intervalos cerrados:
        // start_date <= fin pedido AND end_date >= inicio pedido
        let bookings: Vec<BookingWindow> = sqlx::query_as(
            r#"
            SELECT start_date, end_date
            FROM bookings
            WHERE vehicle_id = $1 AND start_date <= $3 AND end_date >= $2
            ORDER BY end_date ASC
            "#,
        )
        .bind(vehicle_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        let queue_entries: Vec<QueueSlot> = sqlx::query_as(
            "SELECT position FROM queue_entries WHERE vehicle_id = $1 ORDER BY position ASC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        log::debug!(
            "Snapshot de disponibilidad para {}: {} unidades, {} reservas solapadas, {} en cola",
            vehicle_id,
            available_quantity,
            bookings.len(),
            queue_entries.len()
        );

        Ok(Some(VehicleAvailabilitySnapshot {
            vehicle_id,
            available_quantity,
            bookings,
            queue_entries,
        }))
    }
}
