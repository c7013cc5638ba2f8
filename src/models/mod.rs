//! Modelos de dominio
//!
//! Este módulo contiene los structs que mapean a las tablas PostgreSQL
//! y las vistas de solo lectura que consume el estimador de disponibilidad.

pub mod availability;
pub mod vehicle;

pub use availability::*;
pub use vehicle::*;
