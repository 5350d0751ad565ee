// Particle field tuning constants

pub const PARTICLE_COUNT: usize = 400;

// Spawn ranges: size in [0, MAX), opacity in [MIN, MIN+SPAN), forward speed
// in [MIN, MIN+SPAN) depth units per frame
pub const PARTICLE_MAX_SIZE: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_SPEED_MIN: f32 = 0.5;
pub const PARTICLE_SPEED_SPAN: f32 = 2.0;

// Fraction of the viewport a full pointer deflection shifts the far plane
pub const PARALLAX_STRENGTH: f32 = 0.05;

// Pointer smoothing per frame: new = old + (target - old) * α
pub const POINTER_SMOOTHING: f32 = 0.05;

// Drawn radius = size * perspective scale * this factor
pub const PROJECTED_RADIUS_SCALE: f32 = 2.0;

// Cursor tuning

// Ring trailing lerp factor per frame
pub const RING_LERP_FACTOR: f32 = 0.15;

// Magnetic pull: translation = (pointer - element center) * this factor
pub const MAGNETIC_PULL: f32 = 0.3;

// Both cursor elements start parked off-screen until the first pointer move
pub const CURSOR_OFFSCREEN: f32 = -100.0;
