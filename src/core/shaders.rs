// Pass-through vertex shader and single-texture fragment shader (GLSL ES 1.00)

pub const POSITION_ATTRIB: &str = "a_position";
pub const TEX_COORD_ATTRIB: &str = "a_texCoord";
pub const SAMPLER_UNIFORM: &str = "s_texture";

pub const VERTEX_SRC: &str = "\
attribute vec4 a_position;
attribute vec2 a_texCoord;
varying vec2 v_texCoord;
void main()
{
   gl_Position = a_position;
   v_texCoord = a_texCoord;
}
";

pub const FRAGMENT_SRC: &str = "\
precision mediump float;
varying vec2 v_texCoord;
uniform sampler2D s_texture;
void main()
{
  gl_FragColor = texture2D(s_texture, v_texCoord);
}
";
