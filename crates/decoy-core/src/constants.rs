//! Simulation constants and tuning parameters.
//!
//! Every canonical decoy value lives here so the factory, the per-tick
//! reassert step and the tests cannot drift apart.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Default length of one combat round (seconds).
pub const ROUND_SECS: f32 = 5.0;

/// Sentinel written to `rounds_remaining` when a session has ended.
pub const ROUNDS_EXPIRED: i32 = -1;

// --- Placement ---

/// Spawn probe distances when looking ahead normally.
pub const SCAN_DISTANCES_NORMAL: [f32; 2] = [1.8, 2.8];

/// Spawn probe distances when the player looks steeply down (possible shaft).
pub const SCAN_DISTANCES_LOOKING_DOWN: [f32; 2] = [3.0, 4.0];

/// Horizontal probe angles in degrees, center first, positive to the right.
pub const SCAN_YAW_DEGREES: [f32; 9] = [0.0, 5.0, -5.0, 15.0, -15.0, 30.0, -30.0, 45.0, -45.0];

/// Vertical probe angles in degrees: look-down, level, look-up.
pub const SCAN_PITCH_DOWN_DEGREES: [f32; 3] = [25.0, 0.0, -25.0];

/// View pitch (degrees below horizontal) beyond which the far scan distances apply.
pub const LOOKING_DOWN_PITCH_DEGREES: f32 = 45.0;

/// Clearance capsule radius for a medium-sized creature.
pub const CLEARANCE_RADIUS: f32 = 0.4;

/// Clearance capsule half-height (segment half-length, radius excluded).
pub const CLEARANCE_HALF_HEIGHT: f32 = 0.3;

/// Maximum range of the destination ray.
pub const DESTINATION_MAX_RANGE: f32 = 50.0;

/// Pull-back from a destination hit point to avoid clipping into the surface.
pub const DESTINATION_PULLBACK: f32 = 0.02;

// --- Decoy creation ---

/// Standing with the temple of love above which the decoy's gender is flipped.
pub const AMOROUS_REPUTATION_THRESHOLD: i32 = 30;

/// Catalog altitude below which the decoy is aligned to the ground.
pub const GROUND_ALIGN_ALTITUDE: f32 = 2.4;

/// Gap left between a ground-aligned capsule and the floor.
pub const GROUND_SKIN: f32 = 0.05;

/// Lift applied to flying species after ground alignment.
pub const FLYING_LIFT: f32 = 1.5;

/// Local offset of the decoy's light (forward, up).
pub const DECOY_LIGHT_OFFSET: [f32; 3] = [0.0, 0.8, 1.3];

/// Color of the decoy's light.
pub const DECOY_LIGHT_COLOR: [f32; 3] = [1.0, 0.92, 0.016];

/// Armor rating applied to every body slot.
pub const DECOY_ARMOR: i32 = 60;

/// Bonus dodging for monster species, which are inherently easier to hit.
pub const MONSTER_DODGE_BONUS: i32 = 160;

/// Streetwise value that keeps the decoy clear of dirty tricks.
pub const DECOY_STREETWISE: i32 = 500;

/// Chance-to-hit modifier reasserted every tick so the decoy rarely lands blows.
pub const DECOY_TO_HIT_MODIFIER: i32 = -200;

// --- Movement task ---

/// First flicker delay (seconds).
pub const FLICKER_START_DELAY: f32 = 0.1;

/// Amount the flicker delay shrinks every toggle (seconds).
pub const FLICKER_DELAY_STEP: f32 = 0.01;

/// Flicker stops once the delay is no longer above this (seconds).
pub const FLICKER_MIN_DELAY: f32 = 0.01;

/// Interval between travel samples (seconds).
pub const TRAVEL_SAMPLE_SECS: f32 = 0.1;

/// Distance to the waypoint that counts as arrival.
pub const ARRIVAL_DISTANCE: f32 = 1.5;

/// Movement between two samples below which the decoy counts as stalled.
pub const STALL_DISTANCE: f32 = 0.05;

/// Sight and hearing radius once the decoy has arrived.
pub const ARRIVED_SENSE_RADIUS: f32 = 2.0;

// --- Aggro ---

/// Seconds a voice channel stays busy after an attract cue.
pub const ATTRACT_CUE_SECS: f32 = 1.2;

/// Minimum interval between agitation pulses (seconds).
pub const AGITATE_INTERVAL_SECS: f32 = 1.5;

/// Half-width of the random jitter applied to the first agitation stamp (seconds).
pub const AGITATE_JITTER_SECS: f32 = 0.4;

/// Proximity threshold before magnitude scaling.
pub const PROXIMITY_BASE: f32 = 0.8;

/// Magnitude divisor of the proximity threshold.
pub const PROXIMITY_MAGNITUDE_DIVISOR: f32 = 250.0;

// --- Interception ---

/// Radius scanned around the decoy for projectile colliders.
pub const PROJECTILE_SCAN_RADIUS: f32 = 5.0;

/// Launchers closer than this do not trigger a dodge.
pub const DODGE_MIN_LAUNCHER_DISTANCE: f32 = 5.0;

/// Dodge distance per point of magnitude.
pub const DODGE_DISTANCE_PER_MAGNITUDE: f32 = 0.008;

/// Projectile-to-decoy distance that counts as a hit.
pub const PROJECTILE_HIT_DISTANCE: f32 = 0.40;

// --- Motor ---

/// Motors stop approaching their target inside this distance.
pub const MOTOR_STOP_DISTANCE: f32 = 1.0;

/// Default walking speed (units per second).
pub const DEFAULT_MOTOR_SPEED: f32 = 3.0;

// --- Costs and scaling ---

/// Skill points per caster level when scaling magnitude and duration.
pub const SKILL_PER_LEVEL: i32 = 5;

/// Minimum spell point cost of any effect.
pub const MIN_SPELL_POINT_COST: i32 = 5;

// --- HUD ---

/// Base linger time of a HUD message (seconds).
pub const HUD_BASE_LINGER_SECS: f32 = 0.8;

/// Additional linger time per character (seconds).
pub const HUD_LINGER_PER_CHAR_SECS: f32 = 0.03;
