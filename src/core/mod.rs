pub mod color_bars;
pub mod display_context;
pub mod error;
pub mod geometry;
pub mod gpu_context;
pub mod pipeline;
pub mod render_loop;
pub mod shaders;
pub mod stop;
pub mod surface;
pub mod throughput;

pub use color_bars::{band_ranges, ColorBarTexture, BAND_COLORS};
pub use display_context::DisplayContext;
pub use error::{FrameError, RunError, SetupError, FAILURE_EXIT_CODE};
pub use gpu_context::GlContext;
pub use pipeline::{Pipeline, ShaderSources};
pub use render_loop::{FrameOutcome, RenderLoop, CLEAR_COLOR};
pub use stop::StopSignal;
pub use surface::PresentSurface;
pub use throughput::{ThroughputMeter, ThroughputReport, REPORT_INTERVAL};
