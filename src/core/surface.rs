use std::num::NonZeroU32;

use glutin::config::{Api, ColorBufferType, Config, ConfigSurfaceTypes, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use log::{info, warn};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::window::Window;

use super::display_context::DisplayContext;
use super::error::SetupError;
use super::gpu_context::GlContext;
use crate::traits::Presenter;

/// Configs requested from the driver, as with `eglChooseConfig(.., 1, ..)`
pub const REQUESTED_CONFIGS: usize = 1;

/// Take the driver's preferred candidates and insist on exactly one
pub fn exactly_one_config<T>(candidates: impl Iterator<Item = T>) -> Result<T, SetupError> {
    let mut chosen: Vec<T> = candidates.take(REQUESTED_CONFIGS).collect();
    match chosen.len() {
        1 => Ok(chosen.remove(0)),
        n => Err(SetupError::ConfigCount(n)),
    }
}

/// EGL display, context and window surface bound together for the whole run
///
/// Field order is release order: context, then surface, then the display
/// connection, then the native window underneath them.
pub struct PresentSurface {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    display: Display,
    window: Window,
}

impl PresentSurface {
    /// Negotiate a GLES2 context on `window`, make it current and load GL
    ///
    /// Everything acquired before a failing step is released when the
    /// partially built pieces go out of scope.
    pub fn create(window: Window, size: &DisplayContext) -> Result<(Self, GlContext), SetupError> {
        let raw_display = window
            .display_handle()
            .map_err(|e| SetupError::EglDisplay(e.to_string()))?
            .as_raw();
        let raw_window = window
            .window_handle()
            .map_err(|e| SetupError::CreateSurface(e.to_string()))?
            .as_raw();

        // SAFETY: the handles come from a live winit window owned by the
        // returned value, so they outlive the display.
        let display = unsafe { Display::new(raw_display, DisplayApiPreference::Egl) }
            .map_err(|e| SetupError::EglDisplay(e.to_string()))?;
        info!("EGL display: {}", display.version_string());

        let template = ConfigTemplateBuilder::new()
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: 8,
                g_size: 8,
                b_size: 8,
            })
            .with_alpha_size(8)
            .with_api(Api::GLES2)
            .with_surface_type(ConfigSurfaceTypes::WINDOW)
            .compatible_with_native_window(raw_window)
            .build();
        let candidates = unsafe { display.find_configs(template) }
            .map_err(|e| SetupError::ChooseConfig(e.to_string()))?;
        let config: Config = exactly_one_config(candidates)?;
        info!(
            "EGL config: {:?} alpha {} samples {}",
            config.color_buffer_type(),
            config.alpha_size(),
            config.num_samples()
        );

        let (width, height) = NonZeroU32::new(size.width)
            .zip(NonZeroU32::new(size.height))
            .ok_or(SetupError::NoDisplay)?;
        let surface_attributes =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window, width, height);
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(|e| SetupError::CreateSurface(e.to_string()))?;

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(2, 0))))
            .build(Some(raw_window));
        let context = unsafe { display.create_context(&config, &context_attributes) }
            .map_err(|e| SetupError::CreateContext(e.to_string()))?
            .make_current(&surface)
            .map_err(|e| SetupError::MakeCurrent(e.to_string()))?;

        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::DontWait) {
            warn!("driver refused swap interval 0: {e}");
        }
        info!("GLES2 context current on {}x{} surface", size.width, size.height);

        // SAFETY: the context was made current on this thread just above.
        let device = unsafe { GlContext::from_loader(|symbol| display.get_proc_address(symbol)) };

        Ok((
            Self {
                context,
                surface,
                display,
                window,
            },
            device,
        ))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn display(&self) -> &Display {
        &self.display
    }
}

impl Presenter for PresentSurface {
    fn present(&mut self) -> Result<(), String> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| e.to_string())
    }
}
