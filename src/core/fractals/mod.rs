pub mod escape_time;
pub mod formula;
pub mod formula_defaults;
