pub mod measurement;

pub use measurement::SolarMeasurement;
