pub mod availability_dto;
pub mod vehicle_dto;
