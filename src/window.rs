use log::info;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::{Fullscreen, Window, WindowLevel};

use crate::core::{DisplayContext, SetupError};

pub const WINDOW_TITLE: &str = "colorbars";

/// Monitor the pattern is shown on, with its physical size
#[derive(Debug, Clone)]
pub struct DisplayTarget {
    pub monitor: MonitorHandle,
    pub context: DisplayContext,
}

/// Find the primary monitor (or any monitor) and read its physical size
pub fn query_display(event_loop: &ActiveEventLoop) -> Result<DisplayTarget, SetupError> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .ok_or(SetupError::NoDisplay)?;

    let size = monitor.size();
    let context = DisplayContext::from_physical(size.width, size.height).ok_or(SetupError::NoDisplay)?;
    info!(
        "display {}: {}x{}",
        monitor.name().unwrap_or_else(|| "<unnamed>".to_string()),
        context.width,
        context.height
    );

    Ok(DisplayTarget { monitor, context })
}

/// Full-screen, borderless window stacked above other content at the origin
pub fn create_overlay(event_loop: &ActiveEventLoop, target: &DisplayTarget) -> Result<Window, SetupError> {
    let attributes = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(target.context.width, target.context.height))
        .with_position(PhysicalPosition::new(0, 0))
        .with_fullscreen(Some(Fullscreen::Borderless(Some(target.monitor.clone()))))
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_decorations(false)
        .with_resizable(false)
        .with_visible(true);

    event_loop
        .create_window(attributes)
        .map_err(|e| SetupError::CreateWindow(e.to_string()))
}
