/// Maximum terrain height in world units. Normalized height [0,1] maps to [0, MAX_HEIGHT].
pub const MAX_HEIGHT: f32 = 10.0;

/// Tiles are scanned over `-SCAN_EXTENT..=SCAN_EXTENT` on both axes.
pub const SCAN_EXTENT: i32 = 20;
/// Tiles whose world position lies farther than this from the origin are skipped.
pub const ISLAND_RADIUS: f32 = 16.0;

/// Horizontal distance between adjacent tile centres in the same row.
pub const HEX_SPACING_X: f32 = 1.77;
/// Vertical distance between adjacent rows.
pub const HEX_SPACING_Y: f32 = 1.535;
/// Circumradius of a single hex prism.
pub const HEX_RADIUS: f32 = 1.0;

pub const NOISE_FREQUENCY: f32 = 0.1;
/// Exponent applied to normalized noise; >1 biases the island toward low ground.
pub const HEIGHT_EXPONENT: f32 = 1.5;

pub const STONE_HEIGHT: f32 = MAX_HEIGHT * 0.8;
pub const DIRT_HEIGHT: f32 = MAX_HEIGHT * 0.7;
pub const GRASS_HEIGHT: f32 = MAX_HEIGHT * 0.5;
pub const SAND_HEIGHT: f32 = MAX_HEIGHT * 0.3;

/// A tile is decorated when a uniform draw exceeds this value (20% chance).
pub const DECORATION_THRESHOLD: f32 = 0.8;

pub const MAX_CLOUDS: f32 = 4.0;
pub const CLOUD_COUNT_EXPONENT: f32 = 0.45;
/// Clouds are placed within `[-CLOUD_SPREAD, CLOUD_SPREAD]` horizontally.
pub const CLOUD_SPREAD: f32 = 10.0;
pub const CLOUD_MIN_ALTITUDE: f32 = 7.0;
pub const CLOUD_ALTITUDE_RANGE: f32 = 7.0;

/// Default seed for both the noise field and the decoration streams.
pub const DEFAULT_SEED: u64 = 42;
