// Shared layout, interaction and camera tuning constants used by both web and native frontends.

// Goal layout defaults (world units, degrees)
pub const GOAL_WIDTH: f32 = 30.0;
pub const GOAL_HEIGHT: f32 = 10.0;
pub const BACK_SUPPORT_ANGLE_DEG: f32 = 45.0;
pub const POST_RADIUS: f32 = 0.5;

// Extra lengths relative to the frame
pub const SUPPORT_EXTRA_LENGTH: f32 = 4.0; // back supports overshoot the post height
pub const CROSSBAR_EXTRA_LENGTH: f32 = 0.67; // crossbar closes over the posts
pub const BACK_NET_EXTRA_HEIGHT: f32 = 3.5;
pub const BACK_NET_INSET: f32 = 5.0; // back net center: below the crossbar and forward of the back rings

// Tessellation
pub const CYLINDER_SEGMENTS: u32 = 32;
pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
pub const BALL_SEGMENTS: u32 = 32;
pub const BALL_RADIUS_DIVISOR: f32 = 16.0; // ball radius = goal height / divisor

// Colors (sRGB hex)
pub const BACKGROUND_COLOR: u32 = 0x228b22; // ForestGreen
pub const FRAME_COLOR: u32 = 0xffffff;
pub const BALL_COLOR: u32 = 0x000000;
pub const NET_COLOR: u32 = 0xd3d3d3;

// Lights
pub const POINT_LIGHT_INTENSITY: f32 = 500.0;
pub const FRONT_LIGHT_Z: f32 = 10.0;
pub const BACK_LIGHT_Y: f32 = 15.0;
pub const BACK_LIGHT_OFFSET: f32 = 10.0; // behind the back rings
pub const AMBIENT_INTENSITY: f32 = 1.0;

// Interaction
pub const INITIAL_SPEED_FACTOR: f64 = 1.0;
pub const SPEED_STEP: f64 = 0.1;
pub const SHRINK_FACTOR: f32 = 0.95;

// Ball animations, per tick before the speed factor
pub const ANIM1_FORWARD_STEP: f32 = 0.05; // towards -Z
pub const ANIM1_SPIN_STEP: f32 = 0.01; // about the ball's vertical axis
pub const ANIM2_LIFT_STEP: f32 = 0.01; // towards +Y
pub const ANIM2_SPIN_STEP: f32 = -0.01; // about the ball's horizontal axis

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 5.0;

// Orbit controller
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel step
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-4;
