use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{error, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::Point;
use crate::presenters::file::capture_naming::capture_path;
use crate::session::{
    CaptureKind, ExplorerCommand, ExplorerSession, SessionError, SessionFrame, ZoomDirection,
};

#[derive(Debug)]
pub enum CaptureError {
    Session(SessionError),
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(err) => write!(f, "{}", err),
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<SessionError> for CaptureError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

/// Drives a session without a window and writes its captures to disk.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    output_dir: PathBuf,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            presenter,
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Zooms in `steps` times, towards `cursor` unless the session zooms
    /// into the centre.
    pub fn zoom_in(
        &self,
        session: &mut ExplorerSession,
        steps: u32,
        cursor: Point,
    ) -> Result<(), CaptureError> {
        for _ in 0..steps {
            session.handle(ExplorerCommand::Zoom {
                cursor,
                direction: ZoomDirection::In,
            })?;
        }

        Ok(())
    }

    /// Renders the current view and saves it as a screenshot, along with
    /// any animation frame it also belongs to.
    pub fn screenshot(&self, session: &mut ExplorerSession) -> Result<PathBuf, CaptureError> {
        session.handle(ExplorerCommand::Screenshot)?;
        let frame = session.render()?;

        info!("{}", session.status().to_string().trim_end());

        let taken_at = Local::now().naive_local();
        let mut screenshot = None;
        for &kind in &frame.captures {
            let path = self.write(kind, &frame, taken_at)?;
            if kind == CaptureKind::Screenshot {
                screenshot = Some(path);
            }
        }

        match screenshot {
            Some(path) => Ok(path),
            None => self.write(CaptureKind::Screenshot, &frame, taken_at),
        }
    }

    /// Runs a zoom-out capture to completion, saving every frame.
    pub fn record_zoom_out(
        &self,
        session: &mut ExplorerSession,
    ) -> Result<Vec<PathBuf>, CaptureError> {
        session.handle(ExplorerCommand::StartZoomOutCapture)?;

        let mut paths = Vec::new();
        while session.is_capturing() {
            let frame = session.render()?;
            let taken_at = Local::now().naive_local();

            paths.extend(self.save(&frame, taken_at)?);
        }

        info!("wrote {} animation frames", paths.len());
        Ok(paths)
    }

    /// Writes `frame` once per capture tag it carries. Returns the written
    /// paths.
    pub fn save(
        &self,
        frame: &SessionFrame,
        taken_at: NaiveDateTime,
    ) -> Result<Vec<PathBuf>, CaptureError> {
        frame
            .captures
            .iter()
            .map(|&kind| self.write(kind, frame, taken_at))
            .collect()
    }

    fn write(
        &self,
        kind: CaptureKind,
        frame: &SessionFrame,
        taken_at: NaiveDateTime,
    ) -> Result<PathBuf, CaptureError> {
        let path = capture_path(&self.output_dir, kind, taken_at, self.presenter.extension());

        if let Err(source) = self.presenter.present(&frame.frame.buffer, &path) {
            error!("could not save {}: {}", path.display(), source);
            return Err(CaptureError::Write { path, source });
        }

        match kind {
            CaptureKind::Screenshot => info!("saved screenshot {}", path.display()),
            CaptureKind::Animation { sequence } => {
                info!("saved animation frame {} to {}", sequence, path.display())
            }
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::presenters::file::ppm::PpmFilePresenter;
    use crate::session::ExplorerSettings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<PathBuf>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, _buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
            self.written.borrow_mut().push(filepath.to_path_buf());
            Ok(())
        }

        fn extension(&self) -> &str {
            "raw"
        }
    }

    struct FailingPresenter {}

    impl FilePresenterPort for FailingPresenter {
        fn present(&self, _buffer: &PixelBuffer, _filepath: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn extension(&self) -> &str {
            "raw"
        }
    }

    fn session() -> ExplorerSession {
        ExplorerSession::new(
            ExplorerSettings::default(),
            PixelRect::from_size(16, 9).unwrap(),
            StdRng::seed_from_u64(5),
        )
        .unwrap()
    }

    #[test]
    fn screenshot_is_written_under_screenshots() {
        let controller = CliController::new(RecordingPresenter::default(), "out");
        let mut session = session();

        let path = controller.screenshot(&mut session).unwrap();

        assert!(path.starts_with("out/Screenshots"));
        assert_eq!(path.extension().unwrap(), "raw");
        assert_eq!(*controller.presenter.written.borrow(), vec![path]);
    }

    #[test]
    fn zoom_out_recording_writes_numbered_frames() {
        let controller = CliController::new(RecordingPresenter::default(), "out");
        let mut session = session();
        controller.zoom_in(&mut session, 3, Point::default()).unwrap();

        let paths = controller.record_zoom_out(&mut session).unwrap();

        assert_eq!(paths.len(), 4);
        for (sequence, path) in paths.iter().enumerate() {
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(path.starts_with("out/Animations"));
            assert!(name.starts_with(&format!("{}_zoom_", sequence)), "{}", name);
        }
        assert!(!session.is_capturing());
    }

    #[test]
    fn untagged_frames_are_not_saved() {
        let controller = CliController::new(RecordingPresenter::default(), "out");
        let mut session = session();
        let frame = session.render().unwrap();

        let saved = controller.save(&frame, Local::now().naive_local()).unwrap();

        assert!(saved.is_empty());
        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn screenshot_mid_recording_saves_both_captures() {
        let controller = CliController::new(RecordingPresenter::default(), "out");
        let mut session = session();
        controller.zoom_in(&mut session, 3, Point::default()).unwrap();
        session.handle(ExplorerCommand::StartZoomOutCapture).unwrap();

        let path = controller.screenshot(&mut session).unwrap();

        let written = controller.presenter.written.borrow();
        assert_eq!(written.len(), 2);
        assert!(written[0].starts_with("out/Animations"));
        assert_eq!(written[1], path);
        assert!(path.starts_with("out/Screenshots"));
    }

    #[test]
    fn write_failures_carry_the_path() {
        let controller = CliController::new(FailingPresenter {}, "out");
        let mut session = session();

        let err = controller.screenshot(&mut session).unwrap_err();

        match err {
            CaptureError::Write { path, source } => {
                assert!(path.starts_with("out/Screenshots"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn ppm_screenshot_lands_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let controller = CliController::new(PpmFilePresenter::new(), dir.path());
        let mut session = session();

        let path = controller.screenshot(&mut session).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n16 9\n255\n"));
        assert_eq!(bytes.len(), b"P6\n16 9\n255\n".len() + 16 * 9 * 3);
    }
}
