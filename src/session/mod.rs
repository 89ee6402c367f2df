pub mod capture;
pub mod commands;
pub mod errors;
pub mod explorer_session;
pub mod settings;
pub mod status;

pub use capture::CaptureKind;
pub use commands::{ExplorerCommand, ZoomDirection};
pub use errors::SessionError;
pub use explorer_session::{ExplorerSession, SessionFrame};
pub use settings::ExplorerSettings;
pub use status::SessionStatus;
