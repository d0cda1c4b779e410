//! Full-screen quad as a 5-vertex triangle strip.
//!
//! Each vertex is interleaved as `x, y, z, u, v`. Texture `v` is flipped so
//! that row 0 of the uploaded image lands at the top of the screen.

/// Floats of position data per vertex
pub const POSITION_COMPONENTS: i32 = 3;
/// Floats of texture coordinate data per vertex
pub const TEX_COORD_COMPONENTS: i32 = 2;
/// Floats per interleaved vertex
pub const FLOATS_PER_VERTEX: usize = (POSITION_COMPONENTS + TEX_COORD_COMPONENTS) as usize;
/// Vertices in the strip
pub const VERTEX_COUNT: usize = 5;

/// Byte stride between consecutive vertices
pub const STRIDE_BYTES: i32 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as i32;
/// Byte offset of the position attribute
pub const POSITION_OFFSET_BYTES: i32 = 0;
/// Byte offset of the texture coordinate attribute
pub const TEX_COORD_OFFSET_BYTES: i32 = POSITION_COMPONENTS * std::mem::size_of::<f32>() as i32;

#[rustfmt::skip]
pub static QUAD_VERTICES: [f32; VERTEX_COUNT * FLOATS_PER_VERTEX] = [
    -1.0, -1.0, 0.0,   0.0, 1.0, // bottom left
    -1.0,  1.0, 0.0,   0.0, 0.0, // top left
     1.0,  1.0, 0.0,   1.0, 0.0, // top right
     1.0, -1.0, 0.0,   1.0, 1.0, // bottom right
    -1.0, -1.0, 0.0,   0.0, 1.0, // back to bottom left
];

/// Vertex data as raw bytes for buffer upload
pub fn quad_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&QUAD_VERTICES)
}

/// Position of vertex `i`
pub fn position(i: usize) -> [f32; 3] {
    let base = i * FLOATS_PER_VERTEX;
    [QUAD_VERTICES[base], QUAD_VERTICES[base + 1], QUAD_VERTICES[base + 2]]
}

/// Texture coordinate of vertex `i`
pub fn tex_coord(i: usize) -> [f32; 2] {
    let base = i * FLOATS_PER_VERTEX + POSITION_COMPONENTS as usize;
    [QUAD_VERTICES[base], QUAD_VERTICES[base + 1]]
}
