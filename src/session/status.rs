use std::fmt;
use std::time::Duration;

use crate::core::fractals::formula::Formula;

/// On-screen information for the current session state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStatus {
    pub formula: Formula,
    pub iteration_budget: u32,
    pub zoom_level: f64,
    pub frame_time: Option<Duration>,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fractal: {}", self.formula)?;
        writeln!(f, "Iterations: {}", self.iteration_budget)?;
        writeln!(f, "Zoom: x{:.2}", self.zoom_level)?;
        let seconds = self.frame_time.map_or(0.0, |elapsed| elapsed.as_secs_f64());
        writeln!(f, "Time per frame: {:.5}", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_info_block() {
        let status = SessionStatus {
            formula: Formula::BurningShip,
            iteration_budget: 158,
            zoom_level: 1.25,
            frame_time: Some(Duration::from_millis(12)),
        };

        assert_eq!(
            status.to_string(),
            "Fractal: Burning Ship\nIterations: 158\nZoom: x1.25\nTime per frame: 0.01200\n"
        );
    }

    #[test]
    fn missing_frame_time_shows_zero() {
        let status = SessionStatus {
            formula: Formula::Mandelbrot,
            iteration_budget: 32,
            zoom_level: 1.0,
            frame_time: None,
        };

        assert!(status.to_string().ends_with("Time per frame: 0.00000\n"));
    }
}
