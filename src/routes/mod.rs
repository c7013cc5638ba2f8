pub mod availability_routes;
pub mod vehicle_routes;
