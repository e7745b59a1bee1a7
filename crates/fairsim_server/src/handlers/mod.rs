pub mod simulation_handlers;

pub use simulation_handlers::*;
