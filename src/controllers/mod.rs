pub mod availability_controller;
pub mod vehicle_controller;
