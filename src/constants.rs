//! Default geometry and timing for the 128x64 status screen.
//!
//! Everything here is a default only; the live values are carried in
//! [`crate::layout::ScreenLayout`] and [`crate::screen::ScreenConfig`] so they
//! can be overridden per display.

/// The total width of the display in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
/// The total height of the display in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Advance width of the info font (FONT_6X10).
pub const INFO_FONT_WIDTH: i32 = 6;

// Temperature history
/// Number of history slots, one per graph pixel column.
pub const GRAPH_WIDTH: usize = 46;
/// Minimum time between two history samples.
pub const SAMPLE_INTERVAL_MS: u64 = 3000;

// Temperature graphs, shared x origin so heater and bed line up in time
pub const GRAPH_X_ORIGIN: i32 = 33;
pub const GRAPH_HEIGHT: i32 = 21;
pub const HEATER_GRAPH_BASELINE: i32 = 21;
pub const BED_GRAPH_BASELINE: i32 = 44;

// Heater panel
pub const HOTEND_ICON_X: i32 = 0;
pub const HOTEND_ICON_Y: i32 = 2;
pub const BED_ICON_HEATING_Y: i32 = 28;
pub const BED_ICON_IDLE_Y: i32 = 39;
pub const TEMP_TEXT_X: i32 = 18;
pub const HOTEND_TARGET_Y: i32 = 11;
pub const HOTEND_ACTUAL_Y: i32 = 20;
pub const BED_TARGET_Y: i32 = 34;
pub const BED_ACTUAL_Y: i32 = 43;
/// Row of the 2x2 "heating" dot drawn over a static icon.
pub const HEAT_DOT_Y: i32 = 17;
/// Heat-percent overlay bars sit right of the 8px icons.
pub const HEAT_BAR_X: i32 = 9;
pub const HEAT_BAR_WIDTH: u32 = 3;
/// Below this temperature the heat-percent bar stays empty.
pub const HEAT_BAR_AMBIENT: f32 = 20.0;

// Axis read-out
pub const AXIS_LABEL_X: i32 = 80;
pub const AXIS_VALUE_X: i32 = 92;
pub const AXIS_ROWS: [i32; 3] = [7, 16, 25];
pub const AXIS_BLANK_WIDTH: usize = 4;
pub const AXIS_BLANK_WIDTH_Z: usize = 7;

// Z bar
pub const Z_FRAME_X: i32 = 80;
pub const Z_FRAME_Y: i32 = 26;
pub const Z_FRAME_WIDTH: u32 = 9;
pub const Z_FRAME_HEIGHT: u32 = 38;
pub const Z_FILL_X: i32 = 81;
pub const Z_FILL_WIDTH: u32 = 7;
pub const Z_FILL_BOTTOM: i32 = 63;
pub const Z_BAR_HEIGHT: u32 = 36;

// XY plot
pub const XY_FRAME_X: i32 = 90;
pub const XY_FRAME_Y: i32 = 26;
pub const XY_FRAME_SIZE: u32 = 38;
pub const XY_ORIGIN_X: i32 = 91;
pub const XY_ORIGIN_Y: i32 = 62;
pub const XY_SCALE: f32 = 36.0;

// Fan gauge
pub const GAUGE_CENTER_X: i32 = 53;
pub const GAUGE_CENTER_Y: i32 = 63;
pub const GAUGE_RADIUS: u32 = 17;
pub const GAUGE_NEEDLE_RADIUS: f32 = 15.0;
pub const FAN_LABEL_X: i32 = 5;
pub const FAN_LABEL_Y: i32 = 53;
pub const FAN_PERCENT_X: i32 = 2;
pub const FAN_PERCENT_SIGN_X: i32 = 20;
pub const FAN_PERCENT_Y: i32 = 62;

// Default machine travel, mm
pub const X_MAX_POS: f32 = 200.0;
pub const Y_MAX_POS: f32 = 200.0;
pub const Z_MAX_POS: f32 = 200.0;
