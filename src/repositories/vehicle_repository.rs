use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        manufacturer: String,
        model: String,
        daily_rate: Decimal,
        available_quantity: i32,
        category: String,
        transmission: String,
        fuel_type: String,
        seating_capacity: i32,
        year_of_manufacture: i32,
        maintenance_status: String,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, name, manufacturer, model, daily_rate, available_quantity,
                category, transmission, fuel_type, seating_capacity,
                year_of_manufacture, maintenance_status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(manufacturer)
        .bind(model)
        .bind(daily_rate)
        .bind(available_quantity)
        .bind(category)
        .bind(transmission)
        .bind(fuel_type)
        .bind(seating_capacity)
        .bind(year_of_manufacture)
        .bind(maintenance_status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn name_exists(
        &self,
        name: &str,
        manufacturer: &str,
        model: &str,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE name = $1 AND manufacturer = $2 AND model = $3)",
        )
        .bind(name)
        .bind(manufacturer)
        .bind(model)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        daily_rate: Option<Decimal>,
        available_quantity: Option<i32>,
        category: Option<String>,
        transmission: Option<String>,
        fuel_type: Option<String>,
        seating_capacity: Option<i32>,
        maintenance_status: Option<String>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, daily_rate = $3, available_quantity = $4, category = $5,
                transmission = $6, fuel_type = $7, seating_capacity = $8,
                maintenance_status = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(daily_rate.unwrap_or(current.daily_rate))
        .bind(available_quantity.unwrap_or(current.available_quantity))
        .bind(category.unwrap_or(current.category))
        .bind(transmission.unwrap_or(current.transmission))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(seating_capacity.unwrap_or(current.seating_capacity))
        .bind(maintenance_status.unwrap_or(current.maintenance_status))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
