/// Page wiring and pointer tuning for the web frontend.
///
/// Scene dimensions and interaction steps live in `goal_core::constants`;
/// this file only holds what the browser side needs.
// Canvas the renderer draws into; created and appended to <body> when absent
pub const CANVAS_ID: &str = "app-canvas";

// Status line element, created on demand
pub const HINT_OVERLAY_ID: &str = "hint-overlay";

// Fatal startup message element
pub const ERROR_OVERLAY_ID: &str = "error-overlay";

// Only the primary button orbits
pub const ORBIT_POINTER_BUTTON: i16 = 0;

// Cap the backing store so very high DPR screens stay affordable
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Seconds between frame-rate log lines
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

pub const HINT_STYLE: &str = "position: fixed; left: 12px; bottom: 12px; color: #f0f7ee; \
font: 13px system-ui; background: rgba(8, 30, 10, 0.75); padding: 8px 12px; \
border-radius: 6px; border: 1px solid rgba(200, 230, 200, 0.3); pointer-events: none;";

pub const ERROR_STYLE: &str = "position: fixed; inset: 0; display: flex; align-items: center; \
justify-content: center; color: #ffd7d7; font: 16px system-ui; background: #1b0d0d; padding: 24px;";
