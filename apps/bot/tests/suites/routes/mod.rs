pub mod challenge_flow;
pub mod error_shape;
pub mod healthcheck;
pub mod signature;
pub mod simulation_flow;
