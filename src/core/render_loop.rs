use std::time::Instant;

use super::display_context::DisplayContext;
use super::error::FrameError;
use super::geometry::{
    POSITION_COMPONENTS, POSITION_OFFSET_BYTES, STRIDE_BYTES, TEX_COORD_COMPONENTS,
    TEX_COORD_OFFSET_BYTES, VERTEX_COUNT,
};
use super::pipeline::Pipeline;
use super::stop::StopSignal;
use super::throughput::{ThroughputMeter, ThroughputReport};
use crate::traits::{GlesDevice, Presenter};

/// Background tint, set once before the first frame
pub const CLEAR_COLOR: [f32; 4] = [0.08, 0.06, 0.07, 1.0];

/// What the caller should do after a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Keep going; carries a report when a measurement window closed
    Continue(Option<ThroughputReport>),
    /// The stop signal was observed after presenting this frame
    Stop(Option<ThroughputReport>),
}

impl FrameOutcome {
    pub fn report(&self) -> Option<&ThroughputReport> {
        match self {
            FrameOutcome::Continue(report) | FrameOutcome::Stop(report) => report.as_ref(),
        }
    }
}

/// Owns the device, the presentable surface and the pipeline for the run
///
/// Field order is drop order: device objects are released through
/// [`RenderLoop::shutdown`], then the device, then the presenter.
pub struct RenderLoop<D: GlesDevice, P: Presenter> {
    pipeline: Option<Pipeline<D>>,
    device: D,
    presenter: P,
    meter: ThroughputMeter,
    clear_color_set: bool,
    stop: StopSignal,
}

impl<D: GlesDevice, P: Presenter> RenderLoop<D, P> {
    pub fn new(
        device: D,
        presenter: P,
        pipeline: Pipeline<D>,
        context: &DisplayContext,
        stop: StopSignal,
        start: Instant,
    ) -> Self {
        Self::with_meter(device, presenter, pipeline, ThroughputMeter::new(context, start), stop)
    }

    pub fn with_meter(
        device: D,
        presenter: P,
        pipeline: Pipeline<D>,
        meter: ThroughputMeter,
        stop: StopSignal,
    ) -> Self {
        Self {
            pipeline: Some(pipeline),
            device,
            presenter,
            meter,
            clear_color_set: false,
            stop,
        }
    }

    /// Draw and present one frame, then account for it at `now`
    pub fn frame(&mut self, now: Instant) -> Result<FrameOutcome, FrameError> {
        let Some(pipeline) = self.pipeline.as_ref() else {
            return Ok(FrameOutcome::Stop(None));
        };

        if !self.clear_color_set {
            self.device.set_clear_color(CLEAR_COLOR);
            self.clear_color_set = true;
        }

        self.device.bind_float_attrib(
            pipeline.vertices,
            pipeline.position_loc,
            POSITION_COMPONENTS,
            STRIDE_BYTES,
            POSITION_OFFSET_BYTES,
        );
        self.device.bind_float_attrib(
            pipeline.vertices,
            pipeline.tex_coord_loc,
            TEX_COORD_COMPONENTS,
            STRIDE_BYTES,
            TEX_COORD_OFFSET_BYTES,
        );
        self.device
            .bind_texture_unit0(pipeline.texture, &pipeline.sampler_loc);
        self.device.draw_triangle_strip(0, VERTEX_COUNT as i32);

        self.presenter.present().map_err(FrameError::Present)?;

        let report = self.meter.record_frame(now);
        if self.stop.is_triggered() {
            Ok(FrameOutcome::Stop(report))
        } else {
            Ok(FrameOutcome::Continue(report))
        }
    }

    /// Render until the stop signal is observed, handing each report to `on_report`
    pub fn run<F>(&mut self, mut on_report: F) -> Result<(), FrameError>
    where
        F: FnMut(&ThroughputReport),
    {
        loop {
            let outcome = self.frame(Instant::now())?;
            if let Some(report) = outcome.report() {
                on_report(report);
            }
            if let FrameOutcome::Stop(_) = outcome {
                return Ok(());
            }
        }
    }

    /// Release device objects and hand back the device and presenter
    pub fn shutdown(mut self) -> (D, P) {
        if let Some(pipeline) = self.pipeline.take() {
            pipeline.release(&mut self.device);
        }
        (self.device, self.presenter)
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn meter(&self) -> &ThroughputMeter {
        &self.meter
    }
}
