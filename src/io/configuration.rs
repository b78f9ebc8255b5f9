//! Algorithm constants and runtime configuration defaults

// Default values for configurable parameters
/// Default RNG seed; zero lets the engine draw one from entropy
pub const DEFAULT_SEED: u64 = 0;

/// Default extraction window width
pub const DEFAULT_TILE_WIDTH: usize = 3;
/// Default extraction window height
pub const DEFAULT_TILE_HEIGHT: usize = 3;

/// Default output field width in cells
pub const DEFAULT_OUTPUT_WIDTH: usize = 64;
/// Default output field height in cells
pub const DEFAULT_OUTPUT_HEIGHT: usize = 64;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Resolution of per-file collapse progress bars
pub const PROGRESS_TICKS: u64 = 1000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
