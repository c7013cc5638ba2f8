use serde::{Deserialize, Serialize};

// Request para consultar disponibilidad de un vehículo.
// Las fechas llegan como strings RFC3339 y se validan en el controller;
// el id llega como string igual que en el resto de IDs de la API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCheckRequest {
    pub vehicle_id: String,
    pub start_date: String,
    pub end_date: String,
}

/// Clasificación del resultado - etiquetas recalculadas en cada consulta,
/// no es una máquina de estados persistida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Available,
    Queued,
    Unavailable,
}

// Response de disponibilidad - snapshot calculado, sin identidad ni ciclo de vida
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub status: AvailabilityStatus,
    /// 0-100; 100 solo en el caso AVAILABLE, nunca más de 95 en cola
    pub percentage: i32,
    pub can_book_directly: bool,
    /// Solo significativo cuando status == AVAILABLE
    pub available_units: i32,
    /// Posición proyectada en cola - solo lectura, ver nota en el servicio
    pub queue_position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returning_vehicles: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_cancellations: Option<i32>,
    pub message: String,
}
