use std::ffi::{c_void, CStr};

use glow::HasContext;
use log::debug;

use super::color_bars::ColorBarTexture;
use crate::traits::{BuildOutput, GlesDevice, ShaderStage};

/// OpenGL ES 2.0 device backed by `glow`
///
/// Every call assumes the context it was loaded from is current on this
/// thread; [`crate::core::surface::PresentSurface`] guarantees that for the
/// lifetime of the render loop.
pub struct GlContext {
    gl: glow::Context,
}

impl GlContext {
    /// Load GL entry points through the platform's proc-address lookup
    ///
    /// # Safety
    ///
    /// The context `loader` resolves against must be current on this thread.
    pub unsafe fn from_loader<F>(loader: F) -> Self
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        let gl = glow::Context::from_loader_function_cstr(loader);
        debug!("GL version: {:?}", gl.version());
        Self { gl }
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

fn stage_enum(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// The context is current for as long as a GlContext exists, which is the
// invariant every unsafe block below relies on.
impl GlesDevice for GlContext {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Texture = glow::Texture;
    type Buffer = glow::Buffer;
    type UniformLocation = glow::UniformLocation;

    fn compile_shader(
        &mut self,
        stage: ShaderStage,
        source: &str,
    ) -> Result<BuildOutput<Self::Shader>, String> {
        unsafe {
            let shader = self.gl.create_shader(stage_enum(stage))?;
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);

            Ok(BuildOutput {
                handle: shader,
                success: self.gl.get_shader_compile_status(shader),
                log: self.gl.get_shader_info_log(shader),
            })
        }
    }

    fn link_program(&mut self, shaders: &[Self::Shader]) -> Result<BuildOutput<Self::Program>, String> {
        unsafe {
            let program = self.gl.create_program()?;
            for &shader in shaders {
                self.gl.attach_shader(program, shader);
            }
            self.gl.link_program(program);

            Ok(BuildOutput {
                handle: program,
                success: self.gl.get_program_link_status(program),
                log: self.gl.get_program_info_log(program),
            })
        }
    }

    fn use_program(&mut self, program: Self::Program) {
        unsafe { self.gl.use_program(Some(program)) }
    }

    fn delete_shader(&mut self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn upload_texture(&mut self, texture: &ColorBarTexture) -> Result<Self::Texture, String> {
        unsafe {
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

            let id = self.gl.create_texture()?;
            self.gl.bind_texture(glow::TEXTURE_2D, Some(id));
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                texture.width() as i32,
                texture.height() as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(texture.pixels())),
            );
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);

            Ok(id)
        }
    }

    fn upload_vertices(&mut self, data: &[u8]) -> Result<Self::Buffer, String> {
        unsafe {
            let buffer = self.gl.create_buffer()?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
            Ok(buffer)
        }
    }

    fn set_clear_color(&mut self, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        unsafe { self.gl.clear_color(r, g, b, a) }
    }

    fn bind_float_attrib(
        &mut self,
        buffer: Self::Buffer,
        location: u32,
        components: i32,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl
                .vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, stride, offset);
            self.gl.enable_vertex_attrib_array(location);
        }
    }

    fn bind_texture_unit0(&mut self, texture: Self::Texture, sampler: &Self::UniformLocation) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            self.gl.uniform_1_i32(Some(sampler), 0);
        }
    }

    fn draw_triangle_strip(&mut self, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLE_STRIP, first, count) }
    }

    fn delete_program(&mut self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn delete_texture(&mut self, texture: Self::Texture) {
        unsafe { self.gl.delete_texture(texture) }
    }

    fn delete_buffer(&mut self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }
}
