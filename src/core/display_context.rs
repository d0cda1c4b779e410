/// Width used when no real display has been queried
pub const DEFAULT_WIDTH: u32 = 256;
/// Height used when no real display has been queried
pub const DEFAULT_HEIGHT: u32 = 256;

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Display context - the negotiated surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    /// Create new display context
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from a size reported by the platform.
    ///
    /// Returns `None` when either dimension is zero; such a display cannot
    /// back a texture or a surface.
    pub fn from_physical(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self::new(width, height))
        }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    /// Bytes written to the surface by one full-screen frame
    pub fn frame_bytes(&self) -> u64 {
        self.width as u64 * self.height as u64 * BYTES_PER_PIXEL as u64
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
