use thiserror::Error;

use crate::traits::ShaderStage;

/// Exit status for any setup or runtime failure
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Fatal failures while bringing up the display, context, or pipeline
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Got no display to draw on.")]
    NoDisplay,
    #[error("Unable to create fullscreen window: {0}")]
    CreateWindow(String),
    #[error("Got no EGL display: {0}")]
    EglDisplay(String),
    #[error("Failed to choose config: {0}")]
    ChooseConfig(String),
    #[error("Didn't get exactly one config, but {0}")]
    ConfigCount(usize),
    #[error("Unable to create EGL surface: {0}")]
    CreateSurface(String),
    #[error("Unable to create EGL context: {0}")]
    CreateContext(String),
    #[error("Unable to make EGL context current: {0}")]
    MakeCurrent(String),
    #[error("Unable to create {stage} shader object: {reason}")]
    CreateShader { stage: ShaderStage, reason: String },
    #[error("Error compiling {stage} shader{}", log_suffix(.log))]
    CompileShader { stage: ShaderStage, log: String },
    #[error("Unable to create shader program: {0}")]
    CreateProgram(String),
    #[error("Error linking shader program{}", log_suffix(.log))]
    LinkProgram { log: String },
    #[error("Unable to upload texture: {0}")]
    UploadTexture(String),
    #[error("Unable to upload vertex buffer: {0}")]
    UploadVertices(String),
    #[error("Unable to get position location")]
    PositionLocation,
    #[error("Unable to get texture location")]
    TexCoordLocation,
    #[error("Unable to get sampler location")]
    SamplerLocation,
}

fn log_suffix(log: &str) -> String {
    let log = log.trim_end();
    if log.is_empty() {
        String::new()
    } else {
        format!(":\n{log}")
    }
}

impl SetupError {
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Compiler or linker info log carried by this error, if any
    pub fn info_log(&self) -> Option<&str> {
        match self {
            SetupError::CompileShader { log, .. } | SetupError::LinkProgram { log } => {
                Some(log.as_str()).filter(|l| !l.is_empty())
            }
            _ => None,
        }
    }
}

/// Failures detected once the render loop is running
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Unable to present frame: {0}")]
    Present(String),
}

impl FrameError {
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

/// Any failure that ends the run with a non-zero status
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Frame(#[from] FrameError),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Setup(err) => err.exit_code(),
            RunError::Frame(err) => err.exit_code(),
        }
    }
}
