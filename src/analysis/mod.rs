//! Graph analyses: connectivity and Euler circuits.

pub mod connectivity;
pub mod euler;

pub use connectivity::{is_connected, reachable_from, unreachable_vertices};
pub use euler::{
    CircuitBuilder, CircuitError, EulerVerdict, build_circuit, euler_verdict, has_euler_circuit,
};
