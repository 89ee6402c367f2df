pub mod capture_naming;
pub mod ppm;
