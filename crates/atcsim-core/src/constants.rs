//! Simulation constants and tuning parameters.

// --- Earth and units ---

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// Kilometers per foot.
pub const KM_PER_FOOT: f64 = 0.000_304_8;

/// Seconds per hour, for knots to km/s.
pub const SECS_PER_HOUR: f64 = 3600.0;

// --- Kinematics ---

/// Default standard-rate turn (degrees per second).
pub const DEFAULT_TURN_RATE_DEG_S: f64 = 2.0;

/// Default speed change (knots per second).
pub const DEFAULT_ACCELERATION_KT_S: f64 = 10.0;

/// Default climb/descent rate (feet per minute).
pub const DEFAULT_VERTICAL_RATE_FPM: f64 = 1500.0;

/// Lowest speed a controller can assign (knots).
pub const MIN_ASSIGNED_SPEED_KT: f64 = 100.0;

/// Highest altitude a controller can assign (feet).
pub const MAX_ASSIGNED_ALTITUDE_FT: f64 = 60_000.0;

/// Highest speed a controller can assign (knots).
pub const MAX_ASSIGNED_SPEED_KT: f64 = 600.0;

// --- Radar sweep ---

/// Default antenna revolution period (milliseconds).
pub const DEFAULT_SWEEP_INTERVAL_MS: f64 = 2000.0;

// --- Frame loop ---

/// Default display refresh rate driving the frame loop (Hz).
pub const DEFAULT_FRAME_RATE_HZ: u32 = 30;

/// Most aircraft the seeded traffic generator will place.
pub const MAX_TRAFFIC_COUNT: usize = 1000;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1024.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1024.0;

// --- Navigation geometry ---

/// Localizer course length when no approach fix can be found (nautical miles).
pub const DEFAULT_LOCALIZER_LENGTH_NM: f64 = 15.0;

/// Runway number offset between the two ends of the same pavement.
pub const RECIPROCAL_RUNWAY_OFFSET: u8 = 18;

/// ARINC 424 waypoint description flags (fourth character) that mark an
/// initial approach fix: IAF, IAF with hold, IAF with final approach fix.
pub const INITIAL_FIX_DESCRIPTION_FLAGS: [char; 3] = ['A', 'C', 'D'];

// --- Symbology (pixels) ---

/// Half-size of the aircraft target symbol.
pub const TARGET_SYMBOL_HALF_SIZE_PX: f64 = 4.0;

/// Length of the heading leader drawn from the target symbol.
pub const HEADING_LEADER_LENGTH_PX: f64 = 16.0;

/// Distance from the target symbol to the data tag anchor.
pub const TAG_DISTANCE_PX: f64 = 30.0;

/// Default data tag angle (radians, screen space, 0 = right, clockwise).
pub const DEFAULT_TAG_ANGLE_RAD: f64 = -std::f64::consts::FRAC_PI_4;

/// Half-size of waypoint, VOR and airport symbols.
pub const NAV_SYMBOL_HALF_SIZE_PX: f64 = 3.0;

/// Offset of navigation labels from their symbol.
pub const NAV_LABEL_OFFSET_PX: f64 = 5.0;

/// Vertical spacing between data tag lines.
pub const TAG_LINE_SPACING_PX: f64 = 12.0;
