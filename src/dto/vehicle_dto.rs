use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub manufacturer: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    pub daily_rate: Decimal,

    #[validate(range(min = 0))]
    pub available_quantity: i32,

    pub category: String,
    pub transmission: String,
    pub fuel_type: String,

    #[validate(range(min = 1, max = 60))]
    pub seating_capacity: i32,

    #[validate(range(min = 1900, max = 2030))]
    pub year_of_manufacture: i32,

    pub maintenance_status: Option<String>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub daily_rate: Option<Decimal>,

    #[validate(range(min = 0))]
    pub available_quantity: Option<i32>,

    pub category: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,

    #[validate(range(min = 1, max = 60))]
    pub seating_capacity: Option<i32>,

    pub maintenance_status: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub daily_rate: Decimal,
    pub available_quantity: i32,
    pub category: String,
    pub transmission: String,
    pub fuel_type: String,
    pub seating_capacity: i32,
    pub year_of_manufacture: i32,
    pub maintenance_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            manufacturer: vehicle.manufacturer,
            model: vehicle.model,
            daily_rate: vehicle.daily_rate,
            available_quantity: vehicle.available_quantity,
            category: vehicle.category,
            transmission: vehicle.transmission,
            fuel_type: vehicle.fuel_type,
            seating_capacity: vehicle.seating_capacity,
            year_of_manufacture: vehicle.year_of_manufacture,
            maintenance_status: vehicle.maintenance_status,
            created_at: vehicle.created_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
