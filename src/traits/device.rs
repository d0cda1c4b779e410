use std::fmt::Debug;

use crate::core::color_bars::ColorBarTexture;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Outcome of a compile or link step: the object plus its status and info log
#[derive(Debug, Clone)]
pub struct BuildOutput<H> {
    pub handle: H,
    pub success: bool,
    pub log: String,
}

/// OpenGL ES 2.0 operations the pipeline and render loop need
///
/// Object creation can fail at the driver level (`Err(String)`); compile and
/// link failures are reported through `BuildOutput::success` so the caller
/// still gets the info log.
pub trait GlesDevice {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type Texture: Copy + Debug;
    type Buffer: Copy + Debug;
    type UniformLocation: Clone + Debug;

    fn compile_shader(
        &mut self,
        stage: ShaderStage,
        source: &str,
    ) -> Result<BuildOutput<Self::Shader>, String>;

    fn link_program(&mut self, shaders: &[Self::Shader]) -> Result<BuildOutput<Self::Program>, String>;

    fn use_program(&mut self, program: Self::Program);

    fn delete_shader(&mut self, shader: Self::Shader);

    /// Attribute index for `name`, `None` if the linked program has no such attribute
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;

    /// Uniform location for `name`, `None` if the linked program has no such uniform
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;

    /// Upload an RGBA8 image with tight row packing and nearest filtering
    fn upload_texture(&mut self, texture: &ColorBarTexture) -> Result<Self::Texture, String>;

    /// Upload static vertex data into a new array buffer
    fn upload_vertices(&mut self, data: &[u8]) -> Result<Self::Buffer, String>;

    fn set_clear_color(&mut self, rgba: [f32; 4]);

    /// Point a float attribute at `buffer` and enable its array
    fn bind_float_attrib(
        &mut self,
        buffer: Self::Buffer,
        location: u32,
        components: i32,
        stride: i32,
        offset: i32,
    );

    /// Bind `texture` to unit 0 and set `sampler` to read from unit 0
    fn bind_texture_unit0(&mut self, texture: Self::Texture, sampler: &Self::UniformLocation);

    fn draw_triangle_strip(&mut self, first: i32, count: i32);

    fn delete_program(&mut self, program: Self::Program);

    fn delete_texture(&mut self, texture: Self::Texture);

    fn delete_buffer(&mut self, buffer: Self::Buffer);
}

/// A surface that can show the frame just drawn
pub trait Presenter {
    /// Swap the back buffer to the screen
    fn present(&mut self) -> Result<(), String>;
}
