/*
 *  telemetry.rs
 *
 *  printstat - machine controller status screen
 *
 *  Read-only snapshots pulled from the machine each refresh
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

/// Linear machine axes shown on the status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn code(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// Current and target temperature of one heater, degrees C
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaterReading {
    pub actual: f32,
    pub target: f32,
}

impl HeaterReading {
    pub fn new(actual: f32, target: f32) -> Self {
        Self { actual, target }
    }

    /// Still climbing toward its target
    pub fn is_heating(&self) -> bool {
        self.target > self.actual
    }
}

/// Fan duty, always within 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanState {
    percent: u8,
}

impl FanState {
    pub fn new(percent: u8) -> Self {
        Self { percent: percent.min(100) }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }
}

/// Logical machine position, mm
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Homing flags for one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisState {
    /// Reference move completed
    pub homed: bool,
    /// Controller trusts the current coordinate
    pub known: bool,
}

impl AxisState {
    pub const HOMED: AxisState = AxisState { homed: true, known: true };
}

/// Everything the axis read-out needs for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCoordinate {
    pub axis: Axis,
    pub value: f32,
    pub state: AxisState,
}

/// Live machine values, pulled once per refresh
pub trait Telemetry {
    fn hotend(&self) -> HeaterReading;

    fn bed(&self) -> HeaterReading;

    fn fan(&self) -> FanState;

    fn position(&self) -> Position;

    fn axis_state(&self, axis: Axis) -> AxisState;

    fn coordinate(&self, axis: Axis) -> AxisCoordinate {
        AxisCoordinate {
            axis,
            value: self.position().get(axis),
            state: self.axis_state(axis),
        }
    }
}

/// Plain-data [`Telemetry`], handy for tests and replay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub hotend: HeaterReading,
    pub bed: HeaterReading,
    pub fan: FanState,
    pub position: Position,
    pub axes: [AxisState; 3],
}

impl Telemetry for TelemetrySnapshot {
    fn hotend(&self) -> HeaterReading { self.hotend }
    fn bed(&self) -> HeaterReading { self.bed }
    fn fan(&self) -> FanState { self.fan }
    fn position(&self) -> Position { self.position }
    fn axis_state(&self, axis: Axis) -> AxisState { self.axes[axis.index()] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_state_clamps() {
        assert_eq!(FanState::new(250).percent(), 100);
        assert_eq!(FanState::new(42).percent(), 42);
    }

    #[test]
    fn test_is_heating() {
        assert!(HeaterReading::new(25.0, 200.0).is_heating());
        assert!(!HeaterReading::new(200.0, 200.0).is_heating());
        assert!(!HeaterReading::new(30.0, 0.0).is_heating());
    }

    #[test]
    fn test_snapshot_coordinate() {
        let snap = TelemetrySnapshot {
            position: Position::new(1.0, 2.0, 3.0),
            axes: [AxisState::default(), AxisState::HOMED, AxisState::default()],
            ..Default::default()
        };
        let y = snap.coordinate(Axis::Y);
        assert_eq!(y.value, 2.0);
        assert!(y.state.homed);
        assert!(!snap.coordinate(Axis::Z).state.homed);
    }
}
