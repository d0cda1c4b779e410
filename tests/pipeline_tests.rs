mod common;

use colorbars::core::geometry::quad_bytes;
use colorbars::core::{DisplayContext, Pipeline, SetupError};
use colorbars::traits::ShaderStage;
use common::{Call, RecordingDevice};

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_setup_runs_steps_in_order() {
        let mut device = RecordingDevice::new();
        let pipeline = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap();

        assert_eq!(
            device.calls,
            vec![
                Call::CompileShader(ShaderStage::Vertex),
                Call::CompileShader(ShaderStage::Fragment),
                Call::LinkProgram(2),
                Call::DeleteShader(1),
                Call::DeleteShader(2),
                Call::UseProgram(3),
                Call::UploadTexture {
                    width: 256,
                    height: 256,
                    bytes: 262144
                },
                Call::UploadVertices(quad_bytes().len()),
            ]
        );
        assert_eq!(pipeline.program, 3);
        assert_eq!(pipeline.position_loc, 0);
        assert_eq!(pipeline.tex_coord_loc, 1);
        assert_eq!(pipeline.sampler_loc, 7);
    }

    #[test]
    fn test_uploaded_texture_matches_display() {
        let mut device = RecordingDevice::new();
        Pipeline::setup(&mut device, &DisplayContext::new(1920, 1080)).unwrap();

        let texture = device.uploaded.expect("texture uploaded");
        assert_eq!(texture.width(), 1920);
        assert_eq!(texture.height(), 1080);
        assert_eq!(texture.pixel(0, 0), Some([0xFF, 0x00, 0x00, 0xFF]));
        assert_eq!(texture.pixel(1919, 1079), Some([0x00, 0x00, 0x00, 0xFF]));
    }

    #[test]
    fn test_vertex_compile_failure_carries_log() {
        let mut device = RecordingDevice::failing_compile(ShaderStage::Vertex, "0:1: 'attribute' : syntax error");
        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();

        assert!(matches!(err, SetupError::CompileShader { stage: ShaderStage::Vertex, .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.info_log(), Some("0:1: 'attribute' : syntax error"));
        assert!(err.to_string().contains("syntax error"));
        // Nothing after the failing compile is attempted
        assert_eq!(device.calls, vec![Call::CompileShader(ShaderStage::Vertex)]);
    }

    #[test]
    fn test_fragment_compile_failure_with_empty_log() {
        let mut device = RecordingDevice::failing_compile(ShaderStage::Fragment, "");
        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();

        assert_eq!(err.to_string(), "Error compiling fragment shader");
        assert_eq!(err.info_log(), None);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_compile_warnings_are_not_fatal() {
        let mut device = RecordingDevice::new();
        device.compile_warning = Some("warning: implicit precision".to_string());

        assert!(Pipeline::setup(&mut device, &DisplayContext::default()).is_ok());
    }

    #[test]
    fn test_link_failure_is_fatal() {
        let mut device = RecordingDevice::new();
        device.fail_link = Some("varying v_texCoord not written".to_string());

        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();
        assert!(matches!(err, SetupError::LinkProgram { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!device.calls.iter().any(|c| matches!(c, Call::UseProgram(_))));
    }

    #[test]
    fn test_missing_position_attribute() {
        let mut device = RecordingDevice::without(&["a_position"]);
        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();

        assert!(matches!(err, SetupError::PositionLocation));
        assert_eq!(err.to_string(), "Unable to get position location");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_tex_coord_attribute() {
        let mut device = RecordingDevice::without(&["a_texCoord"]);
        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();

        assert!(matches!(err, SetupError::TexCoordLocation));
        assert_eq!(err.to_string(), "Unable to get texture location");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_sampler_uniform() {
        let mut device = RecordingDevice::without(&["s_texture"]);
        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();

        assert!(matches!(err, SetupError::SamplerLocation));
        assert_eq!(err.to_string(), "Unable to get sampler location");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_first_missing_handle_is_reported() {
        let mut device = RecordingDevice::without(&["a_texCoord", "s_texture"]);
        let err = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap_err();
        assert!(matches!(err, SetupError::TexCoordLocation));
    }

    #[test]
    fn test_release_deletes_every_object() {
        let mut device = RecordingDevice::new();
        let pipeline = Pipeline::setup(&mut device, &DisplayContext::default()).unwrap();
        let (program, texture, buffer) = (pipeline.program, pipeline.texture, pipeline.vertices);

        device.calls.clear();
        pipeline.release(&mut device);

        assert_eq!(
            device.calls,
            vec![
                Call::DeleteBuffer(buffer),
                Call::DeleteTexture(texture),
                Call::DeleteProgram(program),
            ]
        );
    }
}
