mod capture;
mod error;
mod export;
mod render;
mod session;
mod state;


pub use error::{EditorError, Result};
pub use export::{ExportOutcome, ShareCapability};
pub use session::{BRUSH_COLOR, EditorSession};
pub use state::RenderState;
