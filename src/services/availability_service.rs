//! Estimador de disponibilidad y cola
//!
//! Cálculo puro sobre un snapshot en memoria: clasifica una petición como
//! AVAILABLE / QUEUED / UNAVAILABLE y produce un porcentaje estimado más un
//! mensaje legible. No toca la base de datos ni muta estado compartido, por
//! lo que puede invocarse concurrentemente sin coordinación.
//!
//! La posición de cola que devuelve es una PROYECCIÓN (recuento actual + 1),
//! nunca una reserva de slot: dos llamadas concurrentes pueden ver la misma
//! posición prospectiva. El subsistema que confirma entradas de cola debe
//! asignar la posición real de forma atómica; este número es solo orientativo.

use chrono::{DateTime, Utc};

use crate::dto::availability_dto::{AvailabilityResponse, AvailabilityStatus};
use crate::models::availability::{BookingWindow, VehicleAvailabilitySnapshot};

/// Tasa histórica media de cancelación. Configurable vía entorno,
/// el default debe mantenerse en 0.15 por compatibilidad.
pub const DEFAULT_AVG_CANCELLATION_RATE: f64 = 0.15;

/// Una reserva solapa con la ventana pedida si
/// `booking.start <= end && booking.end >= start` (intervalos cerrados,
/// los extremos que se tocan cuentan como solape)
pub fn overlaps(booking: &BookingWindow, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    booking.start_date <= end && booking.end_date >= start
}

/// Días hasta la fecha pedida, redondeando hacia arriba.
/// Puede ser negativo si la fecha ya pasó; nunca entra en pánico.
fn days_until(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (start - now).num_milliseconds() as f64;
    (millis / 86_400_000.0).ceil() as i64
}

pub struct AvailabilityService {
    avg_cancellation_rate: f64,
}

impl AvailabilityService {
    pub fn new(avg_cancellation_rate: f64) -> Self {
        Self {
            avg_cancellation_rate,
        }
    }

    pub fn with_default_rate() -> Self {
        Self::new(DEFAULT_AVG_CANCELLATION_RATE)
    }

    /// Clasificar la petición y producir el resultado completo.
    ///
    /// `now` se pasa como parámetro para que el cálculo sea determinista
    /// en tests; el controller pasa `Utc::now()`.
    pub fn estimate(
        &self,
        snapshot: &VehicleAvailabilitySnapshot,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AvailabilityResponse {
        // Recontar los solapes aunque el almacén ya venga pre-filtrado:
        // la corrección no depende del filtrado del colaborador
        let overlapping = snapshot
            .bookings
            .iter()
            .filter(|b| overlaps(b, start, end))
            .count() as i32;

        let available_units = snapshot.available_quantity - overlapping;

        if available_units > 0 {
            return AvailabilityResponse {
                status: AvailabilityStatus::Available,
                percentage: 100,
                can_book_directly: true,
                available_units,
                queue_position: None,
                returning_vehicles: Some(0),
                potential_cancellations: None,
                message: format!("{} unit(s) available for direct booking", available_units),
            };
        }

        self.queue_based_estimate(snapshot, start, end, now)
    }

    /// Rama de cola: posición proyectada + probabilidad heurística de que
    /// una cancelación libere una unidad a tiempo
    fn queue_based_estimate(
        &self,
        snapshot: &VehicleAvailabilitySnapshot,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AvailabilityResponse {
        // La nueva petición iría detrás de todas las entradas actuales.
        // No persiste nada, es solo para mostrar
        let queue_position = snapshot.queue_entries.len() as i32 + 1;

        // Mismo predicado de solape que en estimate()
        let overlapping = snapshot
            .bookings
            .iter()
            .filter(|b| overlaps(b, start, end))
            .count() as i32;

        let percentage =
            self.cancellation_probability(queue_position, overlapping, start, now);

        AvailabilityResponse {
            status: if percentage > 0.0 {
                AvailabilityStatus::Queued
            } else {
                AvailabilityStatus::Unavailable
            },
            percentage: percentage.round() as i32,
            can_book_directly: false,
            available_units: 0,
            queue_position: Some(queue_position),
            returning_vehicles: None,
            potential_cancellations: Some(overlapping),
            message: self.queue_message(queue_position, overlapping, percentage, start, now),
        }
    }

    /// Probabilidad heurística de obtener el vehículo vía cancelación:
    /// - base más alta cuantas menos reservas solapadas, con techo de 80
    /// - cada persona por delante en la cola resta 15 puntos
    /// - reservar con antelación suma hasta 25 puntos (lineal hasta 30 días)
    /// - ajuste por la tasa histórica de cancelación
    /// El resultado se acota a [0, 95]: en cola nunca se reporta 100%.
    fn cancellation_probability(
        &self,
        queue_position: i32,
        overlapping_bookings: i32,
        requested_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> f64 {
        let base_chance = f64::min(80.0, 100.0 - overlapping_bookings as f64 * 10.0);

        let queue_impact = (queue_position - 1) as f64 * 15.0;

        let days_until_booking = days_until(requested_date, now);
        let time_boost = f64::min(25.0, days_until_booking as f64 / 30.0 * 25.0);

        let mut percentage = base_chance - queue_impact + time_boost;
        percentage *= 1.0 + self.avg_cancellation_rate;

        percentage.clamp(0.0, 95.0)
    }

    /// Mensaje específico de cola: posición, reservas solapadas, nota de
    /// antelación si quedan más de 7 días, y tramo cualitativo según el
    /// porcentaje
    fn queue_message(
        &self,
        queue_position: i32,
        overlapping_bookings: i32,
        percentage: f64,
        requested_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> String {
        let days_until_booking = days_until(requested_date, now);
        let rounded = percentage.round() as i32;

        let mut message = format!("You are position {} in queue. ", queue_position);
        message.push_str(&format!(
            "There are currently {} booking(s) during your requested period. ",
            overlapping_bookings
        ));

        if days_until_booking > 7 {
            message.push_str(&format!(
                "Your advance booking {} days ahead improves your chances. ",
                days_until_booking
            ));
        }

        if percentage >= 70.0 {
            message.push_str(&format!(
                "Your chances are good with {}% probability of getting the vehicle.",
                rounded
            ));
        } else if percentage >= 40.0 {
            message.push_str(&format!(
                "You have a moderate chance ({}%) of getting the vehicle.",
                rounded
            ));
        } else {
            message.push_str(&format!(
                "Your booking chance is currently {}%. Consider alternative dates or vehicles.",
                rounded
            ));
        }

        message
    }
}
