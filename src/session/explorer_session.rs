use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::core::actions::render_frame::{RenderedFrame, render_frame};
use crate::core::colour_mapping::palette_reserve::PaletteReserve;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::viewport::{Viewport, ZoomTarget};
use crate::session::capture::CaptureKind;
use crate::session::commands::{ExplorerCommand, ZoomDirection};
use crate::session::errors::SessionError;
use crate::session::settings::ExplorerSettings;
use crate::session::status::SessionStatus;

const ANIMATION_TICK_FALLBACK: f64 = 0.1;

/// A rendered frame plus every capture it should be saved as. A frame can
/// be both an animation frame and a screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFrame {
    pub frame: RenderedFrame,
    pub captures: Vec<CaptureKind>,
}

/// State of one interactive exploration: the view, the colours and the
/// capture bookkeeping that sit between input events and frames.
#[derive(Debug)]
pub struct ExplorerSession {
    settings: ExplorerSettings,
    viewport: Viewport,
    palette: Palette,
    reserve: PaletteReserve,
    rng: StdRng,
    pixel_rect: PixelRect,
    zoom_level: f64,
    animation_tick: f64,
    animation_elapsed: f64,
    pending_screenshot: bool,
    capturing: bool,
    next_capture_sequence: u32,
    last_frame_time: Option<Duration>,
}

impl ExplorerSession {
    /// Session starting from the settings' palette preset.
    pub fn new(
        settings: ExplorerSettings,
        pixel_rect: PixelRect,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        Self::with_palette(settings, settings.palette.palette(), pixel_rect, rng)
    }

    pub fn with_palette(
        settings: ExplorerSettings,
        palette: Palette,
        pixel_rect: PixelRect,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let mut viewport = Viewport::new(settings.formula, settings.dynamic_iterations)
            .with_escape_radius_squared(settings.escape_radius_squared)?;
        viewport.set_iteration_budget(settings.iteration_budget)?;

        let reserve = PaletteReserve::new(&palette, settings.palette_reserve_capacity, &mut rng);

        info!(
            "exploring {} at {}x{} with {} colours",
            settings.formula,
            pixel_rect.width(),
            pixel_rect.height(),
            palette.len()
        );

        Ok(Self {
            settings,
            viewport,
            palette,
            reserve,
            rng,
            pixel_rect,
            zoom_level: 1.0,
            animation_tick: settings.animation_tick,
            animation_elapsed: 0.0,
            pending_screenshot: false,
            capturing: false,
            next_capture_sequence: 0,
            last_frame_time: None,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ExplorerSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    #[must_use]
    pub fn animation_tick(&self) -> f64 {
        self.animation_tick
    }

    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            formula: self.viewport.formula(),
            iteration_budget: self.viewport.iteration_budget(),
            zoom_level: self.zoom_level,
            frame_time: self.last_frame_time,
        }
    }

    /// Changes the output size for subsequent frames.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SessionError> {
        self.pixel_rect = PixelRect::from_size(width, height)?;
        debug!("resized to {}x{}", width, height);

        Ok(())
    }

    /// Applies one input event. A failed command leaves the view as it was.
    pub fn handle(&mut self, command: ExplorerCommand) -> Result<(), SessionError> {
        match command {
            ExplorerCommand::Pan(direction) => {
                self.viewport.pan(direction, self.settings.move_factor)?;
            }
            ExplorerCommand::Drag { from, to } => {
                self.viewport.drag(from, to, self.pixel_rect)?;
            }
            ExplorerCommand::Zoom { cursor, direction } => {
                let target = if self.settings.zoom_into_center {
                    ZoomTarget::Center
                } else {
                    ZoomTarget::Pixel(cursor)
                };
                let factor = match direction {
                    ZoomDirection::In => self.settings.zoom_factor,
                    ZoomDirection::Out => 1.0 / self.settings.zoom_factor,
                };

                self.viewport.zoom(target, factor, self.pixel_rect)?;
                self.zoom_level *= factor;
            }
            ExplorerCommand::SelectFormula(formula) => {
                self.viewport.select_formula(formula);
                self.zoom_level = 1.0;
                info!("switched to {}", formula);
            }
            ExplorerCommand::IncreaseIterations => self.viewport.double_iterations(),
            ExplorerCommand::DecreaseIterations => self.viewport.halve_iterations(),
            ExplorerCommand::ToggleIterationMode => {
                self.viewport.toggle_iteration_mode();
                info!(
                    "iteration mode: {}",
                    if self.viewport.dynamic_iterations() {
                        "dynamic"
                    } else {
                        "fixed"
                    }
                );
            }
            ExplorerCommand::GrowPalette => {
                self.reserve.grow(&mut self.palette);
            }
            ExplorerCommand::ShrinkPalette => self.reserve.shrink(&mut self.palette),
            ExplorerCommand::RandomizePalette => {
                self.palette = Palette::random(self.palette.len(), &mut self.rng)?;
                debug!("randomised {} colours", self.palette.len());
            }
            ExplorerCommand::SlowerAnimation => self.animation_tick *= 2.0,
            ExplorerCommand::FasterAnimation => {
                self.animation_tick *= 0.5;
                if self.animation_tick <= 0.0 {
                    self.animation_tick = ANIMATION_TICK_FALLBACK;
                }
            }
            ExplorerCommand::Screenshot => self.pending_screenshot = true,
            ExplorerCommand::StartZoomOutCapture => {
                self.capturing = true;
                info!("zoom-out capture started at x{:.2}", self.zoom_level);
            }
        }

        Ok(())
    }

    /// Feeds wall-clock time to the animation. The phase advances by one
    /// step once more than a tick has accumulated.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        self.animation_elapsed += elapsed.as_secs_f64();

        if self.animation_elapsed > self.animation_tick {
            self.viewport
                .advance_animation(self.settings.animation_phase_step);
            self.animation_elapsed = 0.0;
        }
    }

    /// Renders the current view.
    ///
    /// While a zoom-out capture runs, every frame is tagged for saving and
    /// the view then zooms out one capture step about the centre, until the
    /// zoom level is back to 1 or below. A requested screenshot always tags
    /// the frame rendered right after the request, capture or not.
    pub fn render(&mut self) -> Result<SessionFrame, SessionError> {
        let frame = render_frame(&mut self.viewport, &self.palette, self.pixel_rect)?;
        self.last_frame_time = Some(frame.stats.elapsed);

        let mut captures = Vec::new();
        if self.capturing {
            captures.push(self.advance_capture()?);
        }
        if self.pending_screenshot {
            self.pending_screenshot = false;
            captures.push(CaptureKind::Screenshot);
        }

        Ok(SessionFrame { frame, captures })
    }

    fn advance_capture(&mut self) -> Result<CaptureKind, SessionError> {
        let sequence = self.next_capture_sequence;
        self.next_capture_sequence += 1;

        let factor = self.settings.capture_zoom_factor;
        self.viewport
            .zoom(ZoomTarget::Center, factor, self.pixel_rect)?;
        self.zoom_level *= factor;

        if self.zoom_level <= 1.0 {
            self.capturing = false;
            info!("zoom-out capture finished after frame {}", sequence);
        }

        Ok(CaptureKind::Animation { sequence })
    }
}
