pub mod clock;
pub mod logging;
pub mod notifier;
pub mod renderer;
pub mod session;

pub use clock::{FrameClock, FrameTime};
pub use logging::{init_logging, LoggingConfig};
pub use notifier::{LogNotifier, Notifier};
pub use renderer::{HeadlessRenderer, RenderError, Renderer};
pub use session::{FrameStatus, Session};

#[cfg(test)]
mod tests;
