pub mod elements;
pub mod integrator;
pub mod recorder;
