//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! El estimador de disponibilidad es cálculo puro sobre snapshots
//! que obtienen los repositorios.

pub mod availability_service;

pub use availability_service::*;
