/// Output pixels (w*h) above which nearest-neighbor upscaling fans rows out with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Fixed zoom applied on top of the detected scale when rendering the final output.
pub const DEFAULT_OUTPUT_MULTIPLIER: u32 = 8;

/// Scale used when nothing has ever been detected.
pub const DEFAULT_SCALE: u32 = 1;

/// Number of channels after decoding (R, G, B, A).
pub const RGBA_CHANNEL_COUNT: usize = 4;

/// Largest channel count a raster may carry.
pub const MAX_CHANNELS: usize = 4;

/// Default preview marker width, in source pixels.
pub const DEFAULT_MARKER_WIDTH: u32 = 4;

/// Default preview marker height, in source pixels.
pub const DEFAULT_MARKER_HEIGHT: u32 = 1;

/// Default preview marker color (opaque red).
pub const DEFAULT_MARKER_COLOR: [u8; 4] = [255, 0, 0, 255];
