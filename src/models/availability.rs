//! Snapshot de disponibilidad de un vehículo
//!
//! Estos structs son la vista de solo lectura que el estimador de
//! disponibilidad recibe del almacén: cantidad de unidades, reservas que
//! solapan con el intervalo pedido y entradas de cola ordenadas por posición.
//! El estimador nunca toca la base de datos directamente.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Ventana de una reserva confirmada (consume una unidad del vehículo
/// durante [start_date, end_date], con start_date < end_date garantizado
/// aguas arriba)
#[derive(Debug, Clone, FromRow)]
pub struct BookingWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Entrada de cola existente - posición ascendente = mayor prioridad
#[derive(Debug, Clone, FromRow)]
pub struct QueueSlot {
    pub position: i32,
}

/// Datos que necesita el estimador para un vehículo e intervalo concretos
#[derive(Debug, Clone)]
pub struct VehicleAvailabilitySnapshot {
    pub vehicle_id: Uuid,
    pub available_quantity: i32,
    /// Reservas pre-filtradas al solape con el intervalo pedido.
    /// El estimador re-valida el predicado de solape de todas formas.
    pub bookings: Vec<BookingWindow>,
    /// Entradas de cola ordenadas por posición ascendente
    pub queue_entries: Vec<QueueSlot>,
}
