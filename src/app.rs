use std::time::Instant;

use log::info;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::core::{
    FrameOutcome, GlContext, Pipeline, PresentSurface, RenderLoop, RunError, SetupError, StopSignal,
};
use crate::window;

type ColorBarLoop = RenderLoop<GlContext, PresentSurface>;

/// Bring up the display, context and pipeline in one go
fn bootstrap(event_loop: &ActiveEventLoop, stop: &StopSignal) -> Result<ColorBarLoop, SetupError> {
    let target = window::query_display(event_loop)?;
    let window = window::create_overlay(event_loop, &target)?;
    let (surface, mut device) = PresentSurface::create(window, &target.context)?;
    let pipeline = Pipeline::setup(&mut device, &target.context)?;

    Ok(RenderLoop::new(
        device,
        surface,
        pipeline,
        &target.context,
        stop.clone(),
        Instant::now(),
    ))
}

/// winit driver: bootstraps on resume, renders whenever the loop is idle
pub struct App {
    stop: StopSignal,
    render_loop: Option<ColorBarLoop>,
    failure: Option<RunError>,
}

impl App {
    pub fn new(stop: StopSignal) -> Self {
        Self {
            stop,
            render_loop: None,
            failure: None,
        }
    }

    /// Outcome of the run once the event loop has returned
    pub fn finish(mut self) -> Result<(), RunError> {
        self.release();
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: RunError) {
        self.failure = Some(err);
        event_loop.exit();
    }

    fn release(&mut self) {
        if let Some(render_loop) = self.render_loop.take() {
            let (device, surface) = render_loop.shutdown();
            drop(device);
            drop(surface);
            info!("released GL objects, context and surface");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_loop.is_some() || self.failure.is_some() {
            return;
        }

        match bootstrap(event_loop, &self.stop) {
            Ok(render_loop) => self.render_loop = Some(render_loop),
            Err(err) => self.fail(event_loop, err.into()),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.stop.trigger();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_loop) = self.render_loop.as_mut() else {
            if self.stop.is_triggered() {
                event_loop.exit();
            }
            return;
        };

        match render_loop.frame(Instant::now()) {
            Ok(outcome) => {
                if let Some(report) = outcome.report() {
                    println!("{report}");
                }
                if let FrameOutcome::Stop(_) = outcome {
                    event_loop.exit();
                }
            }
            Err(err) => self.fail(event_loop, err.into()),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release();
    }
}
