use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::session::capture::CaptureKind;

pub const SCREENSHOT_DIR: &str = "Screenshots";
pub const ANIMATION_DIR: &str = "Animations";

const TIMESTAMP_FORMAT: &str = "%m%d%y%H%M%S";

/// `<root>/Screenshots/ss_<timestamp>.<extension>`
#[must_use]
pub fn screenshot_path(root: &Path, taken_at: NaiveDateTime, extension: &str) -> PathBuf {
    root.join(SCREENSHOT_DIR).join(format!(
        "ss_{}.{}",
        taken_at.format(TIMESTAMP_FORMAT),
        extension
    ))
}

/// `<root>/Animations/<sequence>_zoom_<timestamp>.<extension>`
#[must_use]
pub fn animation_frame_path(
    root: &Path,
    sequence: u32,
    taken_at: NaiveDateTime,
    extension: &str,
) -> PathBuf {
    root.join(ANIMATION_DIR).join(format!(
        "{}_zoom_{}.{}",
        sequence,
        taken_at.format(TIMESTAMP_FORMAT),
        extension
    ))
}

#[must_use]
pub fn capture_path(
    root: &Path,
    kind: CaptureKind,
    taken_at: NaiveDateTime,
    extension: &str,
) -> PathBuf {
    match kind {
        CaptureKind::Screenshot => screenshot_path(root, taken_at, extension),
        CaptureKind::Animation { sequence } => {
            animation_frame_path(root, sequence, taken_at, extension)
        }
    }
}
