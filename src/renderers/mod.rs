pub mod recording;
pub use recording::{DrawnRect, RecordingRenderer};

#[cfg(feature = "macroquad")]
pub mod macroquad;
#[cfg(feature = "macroquad")]
pub use self::macroquad::MacroquadRenderer;
