//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del catálogo de alquiler.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categorías de vehículo permitidas
pub const VEHICLE_CATEGORIES: &[&str] = &[
    "ECONOMY", "COMPACT", "MIDSIZE", "FULLSIZE", "LUXURY", "SUV", "VAN", "TRUCK",
];

/// Tipos de transmisión permitidos
pub const TRANSMISSION_TYPES: &[&str] = &["MANUAL", "AUTOMATIC", "SEMI_AUTOMATIC"];

/// Tipos de combustible permitidos
pub const FUEL_TYPES: &[&str] = &["PETROL", "DIESEL", "HYBRID", "ELECTRIC"];

/// Estados de mantenimiento permitidos
pub const MAINTENANCE_STATUSES: &[&str] = &["EXCELLENT", "GOOD", "NEEDS_SERVICE", "IN_MAINTENANCE"];

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub daily_rate: Decimal,
    /// Unidades totales de la flota nominalmente disponibles (>= 0)
    pub available_quantity: i32,
    pub category: String,
    pub transmission: String,
    pub fuel_type: String,
    pub seating_capacity: i32,
    pub year_of_manufacture: i32,
    pub maintenance_status: String,
    pub created_at: DateTime<Utc>,
}
