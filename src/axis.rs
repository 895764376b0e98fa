/*
 *  axis.rs
 *
 *  printstat - machine controller status screen
 *
 *  Axis read-out text: value formatting and the homing blink policy
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

//! Before homing the value blinks between `123` and `???`, homed but not
//! trusted it blinks between `123` and blanks, homed and known it is shown
//! steadily.

use core::fmt::Write;

use arrayvec::ArrayString;
use embedded_graphics::geometry::Point;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::constants::{AXIS_BLANK_WIDTH, AXIS_BLANK_WIDTH_Z};
use crate::layout::AxisLayout;
use crate::telemetry::{Axis, AxisCoordinate, AxisState};

/// Stack-allocated read-out text
pub type AxisText = ArrayString<16>;

const BLANKS: &str = "                ";

/// What to show for an axis that is homed but whose position is not trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomedUnknownPolicy {
    /// Blank the value on the off phase of the blink
    #[default]
    Blank,
    /// Treat it like a known position
    ShowValue,
}

/// Read-out state for one axis in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDisplay {
    BlinkOn,
    Unhomed,
    HomedUnknown,
    HomedKnown,
}

pub fn classify(blink: bool, state: AxisState, policy: HomedUnknownPolicy) -> AxisDisplay {
    if blink {
        AxisDisplay::BlinkOn
    } else if !state.homed {
        AxisDisplay::Unhomed
    } else if !state.known && policy == HomedUnknownPolicy::Blank {
        AxisDisplay::HomedUnknown
    } else {
        AxisDisplay::HomedKnown
    }
}

/// Copies `chars` until the text is full
fn capped(chars: impl Iterator<Item = char>) -> AxisText {
    let mut out = AxisText::new();
    for c in chars {
        if out.try_push(c).is_err() {
            break;
        }
    }
    out
}

/// Replaces every character above `'.'` with `'?'`; sign, space and the
/// decimal point survive so the shape of the number stays visible.
pub fn placeholder(value: &str) -> AxisText {
    capped(value.chars().map(|c| if c <= '.' { c } else { '?' }))
}

/// Z gets the wider blank
pub fn blank_for(axis: Axis) -> &'static str {
    match axis {
        Axis::Z => &BLANKS[..AXIS_BLANK_WIDTH_Z],
        _ => &BLANKS[..AXIS_BLANK_WIDTH],
    }
}

/// Text to draw for `value` under the blink policy
pub fn axis_text(
    axis: Axis,
    value: &str,
    blink: bool,
    state: AxisState,
    policy: HomedUnknownPolicy,
) -> AxisText {
    match classify(blink, state, policy) {
        AxisDisplay::Unhomed => placeholder(value),
        AxisDisplay::HomedUnknown => capped(blank_for(axis).chars()),
        AxisDisplay::BlinkOn | AxisDisplay::HomedKnown => capped(value.chars()),
    }
}

/// Four-column signed read-out: `12.3`, ` 0.5`, `-1.2`.
///
/// Values outside -9.9..=99.9 fall back to the whole part right-justified,
/// ` 150` or ` -15`.
pub fn format_axis_value(f: f32) -> AxisText {
    let mut out = AxisText::new();
    let tenths = ((f * 100.0 + if f < 0.0 { -5.0 } else { 5.0 }) / 10.0) as i32;
    if !(-99..=999).contains(&tenths) {
        let _ = write!(&mut out, "{:>4}", f as i32);
        return out;
    }

    let neg = tenths < 0;
    let t = tenths.unsigned_abs();
    let digit = |n: u32| char::from_digit(n % 10, 10).unwrap_or('0');
    out.push(if neg {
        '-'
    } else if t >= 100 {
        digit(t / 100)
    } else {
        ' '
    });
    out.push(digit(t / 10));
    out.push('.');
    out.push(digit(t));
    out
}

/// Draws the `X:`/`Y:`/`Z:` labels and values
#[derive(Debug, Clone, Copy)]
pub struct AxisReadout {
    layout: AxisLayout,
    policy: HomedUnknownPolicy,
}

impl AxisReadout {
    pub fn new(layout: AxisLayout, policy: HomedUnknownPolicy) -> Self {
        Self { layout, policy }
    }

    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        coord: AxisCoordinate,
        blink: bool,
    ) -> Result<(), C::Error> {
        let row = self.layout.rows[coord.axis.index()];

        let mut label = ArrayString::<4>::new();
        let _ = write!(&mut label, "{}: ", coord.axis.code());
        canvas.text(Point::new(self.layout.label_x, row), &label)?;

        let value = format_axis_value(coord.value);
        let text = axis_text(coord.axis, &value, blink, coord.state, self.policy);
        canvas.text(Point::new(self.layout.value_x, row), &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    const UNHOMED: AxisState = AxisState { homed: false, known: false };
    const HOMED_UNKNOWN: AxisState = AxisState { homed: true, known: false };

    #[test]
    fn test_placeholder_keeps_punctuation() {
        assert_eq!(placeholder("-12.50").as_str(), "-??.??");
        assert_eq!(placeholder(" 0.5").as_str(), " ?.?");
        assert_eq!(placeholder("+1,2").as_str(), "+?,?");
        assert_eq!(placeholder("").as_str(), "");
    }

    #[test]
    fn test_classify_states() {
        use HomedUnknownPolicy::*;
        assert_eq!(classify(true, UNHOMED, Blank), AxisDisplay::BlinkOn);
        assert_eq!(classify(false, UNHOMED, Blank), AxisDisplay::Unhomed);
        assert_eq!(classify(false, HOMED_UNKNOWN, Blank), AxisDisplay::HomedUnknown);
        assert_eq!(classify(false, HOMED_UNKNOWN, ShowValue), AxisDisplay::HomedKnown);
        assert_eq!(classify(false, AxisState::HOMED, Blank), AxisDisplay::HomedKnown);
    }

    #[test]
    fn test_axis_text_per_state() {
        let p = HomedUnknownPolicy::Blank;
        assert_eq!(axis_text(Axis::X, "12.3", true, UNHOMED, p).as_str(), "12.3");
        assert_eq!(axis_text(Axis::X, "12.3", false, UNHOMED, p).as_str(), "??.?");
        assert_eq!(axis_text(Axis::X, "12.3", false, HOMED_UNKNOWN, p).as_str(), "    ");
        assert_eq!(axis_text(Axis::Z, "12.3", false, HOMED_UNKNOWN, p).as_str(), "       ");
        assert_eq!(axis_text(Axis::Y, "12.3", false, AxisState::HOMED, p).as_str(), "12.3");
    }

    #[test]
    fn test_long_value_is_capped_in_every_state() {
        let long = "12345678901234567890";
        let p = HomedUnknownPolicy::ShowValue;
        for (blink, state) in [(true, AxisState::HOMED), (false, AxisState::HOMED), (false, UNHOMED)] {
            assert_eq!(axis_text(Axis::X, long, blink, state, p).len(), 16);
        }
        assert_eq!(axis_text(Axis::X, long, true, UNHOMED, p).as_str(), &long[..16]);
        assert_eq!(axis_text(Axis::X, long, false, UNHOMED, p).as_str(), "????????????????");
        let blank = axis_text(Axis::X, long, false, HOMED_UNKNOWN, HomedUnknownPolicy::Blank);
        assert_eq!(blank.as_str(), "    ");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(12.34).as_str(), "12.3");
        assert_eq!(format_axis_value(0.5).as_str(), " 0.5");
        assert_eq!(format_axis_value(0.0).as_str(), " 0.0");
        assert_eq!(format_axis_value(-1.23).as_str(), "-1.2");
        assert_eq!(format_axis_value(99.9).as_str(), "99.9");
    }

    #[test]
    fn test_format_axis_value_falls_back_to_integer() {
        assert_eq!(format_axis_value(150.0).as_str(), " 150");
        assert_eq!(format_axis_value(-15.0).as_str(), " -15");
        assert_eq!(format_axis_value(1234.5).as_str(), "1234");
    }

    #[test]
    fn test_readout_renders_label_and_value() {
        let readout = AxisReadout::new(AxisLayout::default(), HomedUnknownPolicy::Blank);
        let mut canvas = RecordingCanvas::new();
        let coord = AxisCoordinate { axis: Axis::Y, value: 42.0, state: UNHOMED };
        readout.render(&mut canvas, coord, false).unwrap();

        assert_eq!(canvas.texts_at_x(80), vec![(Point::new(80, 16), "Y: ")]);
        assert_eq!(canvas.texts_at_x(92), vec![(Point::new(92, 16), "??.?")]);
    }
}
