pub mod availability_repository;
pub mod vehicle_repository;
