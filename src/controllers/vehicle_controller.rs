use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse,
};
use crate::models::vehicle::{
    FUEL_TYPES, MAINTENANCE_STATUSES, TRANSMISSION_TYPES, VEHICLE_CATEGORIES,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::{validate_enum, validate_non_negative, validate_not_empty};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos
        request.validate()?;
        validate_not_empty(&request.name)
            .map_err(|_| AppError::BadRequest("Vehicle name is required".to_string()))?;
        validate_non_negative(request.daily_rate)
            .map_err(|_| AppError::BadRequest("Daily rate cannot be negative".to_string()))?;
        validate_enum(request.category.as_str(), VEHICLE_CATEGORIES)
            .map_err(|_| AppError::BadRequest("Unknown vehicle category".to_string()))?;
        validate_enum(request.transmission.as_str(), TRANSMISSION_TYPES)
            .map_err(|_| AppError::BadRequest("Unknown transmission type".to_string()))?;
        validate_enum(request.fuel_type.as_str(), FUEL_TYPES)
            .map_err(|_| AppError::BadRequest("Unknown fuel type".to_string()))?;

        let maintenance_status = request
            .maintenance_status
            .unwrap_or_else(|| "GOOD".to_string());
        validate_enum(maintenance_status.as_str(), MAINTENANCE_STATUSES)
            .map_err(|_| AppError::BadRequest("Unknown maintenance status".to_string()))?;

        // Verificar que no exista ya el mismo vehículo en el catálogo
        if self
            .repository
            .name_exists(&request.name, &request.manufacturer, &request.model)
            .await?
        {
            return Err(conflict_error("Vehicle", "name", &request.name));
        }

        let vehicle = self
            .repository
            .create(
                request.name,
                request.manufacturer,
                request.model,
                request.daily_rate,
                request.available_quantity,
                request.category,
                request.transmission,
                request.fuel_type,
                request.seating_capacity,
                request.year_of_manufacture,
                maintenance_status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        if let Some(category) = &request.category {
            validate_enum(category.as_str(), VEHICLE_CATEGORIES)
                .map_err(|_| AppError::BadRequest("Unknown vehicle category".to_string()))?;
        }
        if let Some(transmission) = &request.transmission {
            validate_enum(transmission.as_str(), TRANSMISSION_TYPES)
                .map_err(|_| AppError::BadRequest("Unknown transmission type".to_string()))?;
        }
        if let Some(fuel_type) = &request.fuel_type {
            validate_enum(fuel_type.as_str(), FUEL_TYPES)
                .map_err(|_| AppError::BadRequest("Unknown fuel type".to_string()))?;
        }
        if let Some(maintenance_status) = &request.maintenance_status {
            validate_enum(maintenance_status.as_str(), MAINTENANCE_STATUSES)
                .map_err(|_| AppError::BadRequest("Unknown maintenance status".to_string()))?;
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.daily_rate,
                request.available_quantity,
                request.category,
                request.transmission,
                request.fuel_type,
                request.seating_capacity,
                request.maintenance_status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
