pub mod polling;

pub use polling::start_watching;
