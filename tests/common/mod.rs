#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use colorbars::core::ColorBarTexture;
use colorbars::traits::{BuildOutput, GlesDevice, Presenter, ShaderStage};

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CompileShader(ShaderStage),
    LinkProgram(usize),
    UseProgram(u32),
    DeleteShader(u32),
    UploadTexture { width: u32, height: u32, bytes: usize },
    UploadVertices(usize),
    SetClearColor([f32; 4]),
    BindFloatAttrib { location: u32, components: i32, stride: i32, offset: i32 },
    BindTextureUnit0 { texture: u32, sampler: i32 },
    DrawTriangleStrip { first: i32, count: i32 },
    DeleteProgram(u32),
    DeleteTexture(u32),
    DeleteBuffer(u32),
}

/// Mock GLES device that records calls and can be told to misbehave
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub calls: Vec<Call>,
    pub fail_compile: Option<(ShaderStage, String)>,
    pub compile_warning: Option<String>,
    pub fail_link: Option<String>,
    pub missing_names: HashSet<String>,
    pub uploaded: Option<ColorBarTexture>,
    next_handle: u32,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_compile(stage: ShaderStage, log: &str) -> Self {
        Self {
            fail_compile: Some((stage, log.to_string())),
            ..Self::default()
        }
    }

    pub fn without(names: &[&str]) -> Self {
        Self {
            missing_names: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    fn handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl GlesDevice for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type Texture = u32;
    type Buffer = u32;
    type UniformLocation = i32;

    fn compile_shader(&mut self, stage: ShaderStage, _source: &str) -> Result<BuildOutput<u32>, String> {
        self.calls.push(Call::CompileShader(stage));
        let handle = self.handle();
        match &self.fail_compile {
            Some((failing, log)) if *failing == stage => Ok(BuildOutput {
                handle,
                success: false,
                log: log.clone(),
            }),
            _ => Ok(BuildOutput {
                handle,
                success: true,
                log: self.compile_warning.clone().unwrap_or_default(),
            }),
        }
    }

    fn link_program(&mut self, shaders: &[u32]) -> Result<BuildOutput<u32>, String> {
        self.calls.push(Call::LinkProgram(shaders.len()));
        let handle = self.handle();
        Ok(BuildOutput {
            handle,
            success: self.fail_link.is_none(),
            log: self.fail_link.clone().unwrap_or_default(),
        })
    }

    fn use_program(&mut self, program: u32) {
        self.calls.push(Call::UseProgram(program));
    }

    fn delete_shader(&mut self, shader: u32) {
        self.calls.push(Call::DeleteShader(shader));
    }

    fn attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        if self.missing_names.contains(name) {
            return None;
        }
        match name {
            "a_position" => Some(0),
            "a_texCoord" => Some(1),
            _ => None,
        }
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<i32> {
        if self.missing_names.contains(name) || name != "s_texture" {
            None
        } else {
            Some(7)
        }
    }

    fn upload_texture(&mut self, texture: &ColorBarTexture) -> Result<u32, String> {
        self.calls.push(Call::UploadTexture {
            width: texture.width(),
            height: texture.height(),
            bytes: texture.pixels().len(),
        });
        self.uploaded = Some(texture.clone());
        Ok(self.handle())
    }

    fn upload_vertices(&mut self, data: &[u8]) -> Result<u32, String> {
        self.calls.push(Call::UploadVertices(data.len()));
        Ok(self.handle())
    }

    fn set_clear_color(&mut self, rgba: [f32; 4]) {
        self.calls.push(Call::SetClearColor(rgba));
    }

    fn bind_float_attrib(&mut self, _buffer: u32, location: u32, components: i32, stride: i32, offset: i32) {
        self.calls.push(Call::BindFloatAttrib {
            location,
            components,
            stride,
            offset,
        });
    }

    fn bind_texture_unit0(&mut self, texture: u32, sampler: &i32) {
        self.calls.push(Call::BindTextureUnit0 {
            texture,
            sampler: *sampler,
        });
    }

    fn draw_triangle_strip(&mut self, first: i32, count: i32) {
        self.calls.push(Call::DrawTriangleStrip { first, count });
    }

    fn delete_program(&mut self, program: u32) {
        self.calls.push(Call::DeleteProgram(program));
    }

    fn delete_texture(&mut self, texture: u32) {
        self.calls.push(Call::DeleteTexture(texture));
    }

    fn delete_buffer(&mut self, buffer: u32) {
        self.calls.push(Call::DeleteBuffer(buffer));
    }
}

/// Presenter that counts swaps and can fail on a given swap
#[derive(Debug, Clone, Default)]
pub struct CountingPresenter {
    pub presented: Rc<RefCell<u64>>,
    pub fail_on: Option<u64>,
}

impl CountingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(frame: u64) -> Self {
        Self {
            fail_on: Some(frame),
            ..Self::default()
        }
    }

    pub fn count(&self) -> u64 {
        *self.presented.borrow()
    }
}

impl Presenter for CountingPresenter {
    fn present(&mut self) -> Result<(), String> {
        let next = *self.presented.borrow() + 1;
        if self.fail_on == Some(next) {
            return Err("EGL_BAD_SURFACE".to_string());
        }
        *self.presented.borrow_mut() = next;
        Ok(())
    }
}
