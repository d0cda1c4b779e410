use log::{debug, warn};

use super::color_bars::ColorBarTexture;
use super::display_context::DisplayContext;
use super::error::SetupError;
use super::geometry;
use super::shaders::{
    FRAGMENT_SRC, POSITION_ATTRIB, SAMPLER_UNIFORM, TEX_COORD_ATTRIB, VERTEX_SRC,
};
use crate::traits::{GlesDevice, ShaderStage};

/// Shader sources the pipeline compiles
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl Default for ShaderSources<'static> {
    fn default() -> Self {
        Self {
            vertex: VERTEX_SRC,
            fragment: FRAGMENT_SRC,
        }
    }
}

/// Device objects created once at startup and used by every frame
pub struct Pipeline<D: GlesDevice> {
    pub program: D::Program,
    pub texture: D::Texture,
    pub vertices: D::Buffer,
    pub position_loc: u32,
    pub tex_coord_loc: u32,
    pub sampler_loc: D::UniformLocation,
}

impl<D: GlesDevice> std::fmt::Debug for Pipeline<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("program", &self.program)
            .field("texture", &self.texture)
            .field("vertices", &self.vertices)
            .field("position_loc", &self.position_loc)
            .field("tex_coord_loc", &self.tex_coord_loc)
            .field("sampler_loc", &self.sampler_loc)
            .finish()
    }
}

impl<D: GlesDevice> Pipeline<D> {
    /// Compile, link, synthesize and upload the color bars, resolve handles
    pub fn setup(device: &mut D, context: &DisplayContext) -> Result<Self, SetupError> {
        Self::setup_with_sources(device, context, ShaderSources::default())
    }

    /// Same as [`Pipeline::setup`] with caller-provided shader sources
    pub fn setup_with_sources(
        device: &mut D,
        context: &DisplayContext,
        sources: ShaderSources<'_>,
    ) -> Result<Self, SetupError> {
        let vertex_shader = compile(device, ShaderStage::Vertex, sources.vertex)?;
        let fragment_shader = compile(device, ShaderStage::Fragment, sources.fragment)?;

        let program = device
            .link_program(&[vertex_shader, fragment_shader])
            .map_err(SetupError::CreateProgram)?;
        device.delete_shader(vertex_shader);
        device.delete_shader(fragment_shader);
        if !program.success {
            return Err(SetupError::LinkProgram { log: program.log });
        }
        let program = program.handle;
        device.use_program(program);
        debug!("shader program linked and in use");

        let bars = ColorBarTexture::synthesize(context);
        let texture = device
            .upload_texture(&bars)
            .map_err(SetupError::UploadTexture)?;
        debug!("uploaded {}x{} color bar texture", bars.width(), bars.height());

        let vertices = device
            .upload_vertices(geometry::quad_bytes())
            .map_err(SetupError::UploadVertices)?;

        let position_loc = device
            .attrib_location(program, POSITION_ATTRIB)
            .ok_or(SetupError::PositionLocation)?;
        let tex_coord_loc = device
            .attrib_location(program, TEX_COORD_ATTRIB)
            .ok_or(SetupError::TexCoordLocation)?;
        let sampler_loc = device
            .uniform_location(program, SAMPLER_UNIFORM)
            .ok_or(SetupError::SamplerLocation)?;

        Ok(Self {
            program,
            texture,
            vertices,
            position_loc,
            tex_coord_loc,
            sampler_loc,
        })
    }

    /// Delete every device object this pipeline owns
    pub fn release(self, device: &mut D) {
        device.delete_buffer(self.vertices);
        device.delete_texture(self.texture);
        device.delete_program(self.program);
    }
}

fn compile<D: GlesDevice>(
    device: &mut D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, SetupError> {
    let output = device
        .compile_shader(stage, source)
        .map_err(|reason| SetupError::CreateShader { stage, reason })?;

    if !output.success {
        return Err(SetupError::CompileShader {
            stage,
            log: output.log,
        });
    }
    if !output.log.trim().is_empty() {
        warn!("{stage} shader compiled with messages:\n{}", output.log.trim_end());
    }

    Ok(output.handle)
}
