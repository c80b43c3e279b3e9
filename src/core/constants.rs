// Layout, navigation and particle tuning constants.
//
// Everything here is plain data so the pure modules (and the host-side tests
// that `include!` them) can share a single source of truth.

// Viewport classes (logical CSS pixels)
pub const MOBILE_BREAKPOINT: f64 = 768.0; // width <= this is the mobile class
pub const SIDEBAR_MIN_WIDTH: f64 = 1024.0; // sidebar requires width > this

// Scroll thresholds for navigation morphing
pub const SCROLL_THRESHOLD: f64 = 100.0;
pub const SIDEBAR_THRESHOLD: f64 = 300.0;

// Height of the navigation bar used to offset scroll targets
pub const NAV_HEIGHT_MOBILE: f64 = 70.0;
pub const NAV_HEIGHT_SIDEBAR: f64 = 20.0;
pub const NAV_HEIGHT_DEFAULT: f64 = 80.0;

// Active-section marker sits this far down the viewport
pub const SECTION_MARKER_FRACTION: f64 = 1.0 / 3.0;

// Debounce settle windows
pub const SCROLL_SETTLE_MS: u32 = 10;
pub const RESIZE_SETTLE_MS: u32 = 250;

// Floating action button is fully raised past this scroll offset
pub const FAB_SCROLL_THRESHOLD: f64 = 200.0;

// Minimum vertical travel for a touch swipe to count
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// Particle palette shared by both profiles
pub const PARTICLE_PALETTE: [&str; 4] = ["#3B82F6", "#10B981", "#F59E0B", "#8B5CF6"];

// Particle profiles
pub const MOBILE_PARTICLE_COUNT: usize = 50;
pub const DESKTOP_PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const MOBILE_PARTICLE_SIZE_MAX: f32 = 2.0;
pub const DESKTOP_PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.05;
pub const MOBILE_PARTICLE_SPEED_MAX: f32 = 0.15;
pub const DESKTOP_PARTICLE_SPEED_MAX: f32 = 0.25;
pub const MOBILE_CONNECTION_DISTANCE: f32 = 80.0;
pub const DESKTOP_CONNECTION_DISTANCE: f32 = 120.0;
pub const MOBILE_POINTER_DISTANCE: f32 = 100.0;
pub const DESKTOP_POINTER_DISTANCE: f32 = 150.0;

// Base opacity drawn per particle at creation: [MIN, MIN + SPAN]
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// Pointer interaction
pub const POINTER_FORCE_SCALE: f32 = 0.01; // velocity added per unit force
pub const POINTER_OPACITY_BOOST: f32 = 0.5; // opacity added per unit force
pub const VELOCITY_CAP_FACTOR: f32 = 2.0; // per-axis cap = factor * speed max

// Drag applied when a particle is outside pointer range
pub const DAMPING_POINTER_ACTIVE: f32 = 0.99;
pub const DAMPING_POINTER_IDLE: f32 = 0.995;

// Connection line shaping
pub const CONNECTION_ALPHA_BASE: f32 = 0.5;
pub const CONNECTION_ENHANCED_WIDTH: f32 = 1.0; // extra width at full enhancement
pub const POINTER_LINK_ALPHA: f32 = 0.3;

// Normalized timestep
pub const REFERENCE_FRAME_HZ: f32 = 60.0;
pub const MAX_FRAMES_PER_STEP: f32 = 4.0;
