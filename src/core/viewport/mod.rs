pub mod errors;
pub mod iteration_budget;
pub mod viewport;
pub mod zoom;

pub use errors::ViewportError;
pub use viewport::{PanDirection, Viewport};
pub use zoom::ZoomTarget;
