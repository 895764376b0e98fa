/*
 *  sim.rs
 *
 *  printstat - machine controller status screen
 *
 *  Simulated printer feeding the demo binary
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

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::position::Bounds;
use crate::telemetry::{
    Axis, AxisState, FanState, HeaterReading, Position, Telemetry,
};

const AMBIENT: f32 = 22.0;
const HOTEND_TARGET: f32 = 210.0;
const BED_TARGET: f32 = 60.0;

/// Time to home all axes after start
const HOMING_MS: u64 = 4_000;
/// Heaters switch on once homing completes
const HEAT_DELAY_MS: u64 = HOMING_MS + 1_000;

/// Per-ms first-order approach rates
const HOTEND_RATE: f32 = 0.0006;
const BED_RATE: f32 = 0.00015;

/// Head speed, mm per ms
const HEAD_SPEED: f32 = 0.05;

/// Pretend printer: homes, heats up, then wanders the head around the bed
/// with the part fan ramping in once the hotend is at temperature.
#[derive(Debug, Clone)]
pub struct SimulatedPrinter {
    rng: StdRng,
    bounds: Bounds,
    now_ms: u64,
    hotend: HeaterReading,
    bed: HeaterReading,
    fan: u8,
    position: Position,
    waypoint: Position,
    axes: [AxisState; 3],
}

impl SimulatedPrinter {
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bounds,
            now_ms: 0,
            hotend: HeaterReading::new(AMBIENT, 0.0),
            bed: HeaterReading::new(AMBIENT, 0.0),
            fan: 0,
            position: Position::default(),
            waypoint: Position::default(),
            axes: [AxisState::default(); 3],
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the simulation forward to `now_ms`; earlier times are ignored.
    pub fn advance(&mut self, now_ms: u64) {
        let dt = now_ms.saturating_sub(self.now_ms);
        if dt == 0 {
            return;
        }
        let was_homed = self.axes[0].homed;
        self.now_ms = now_ms;

        if now_ms >= HOMING_MS && !was_homed {
            self.axes = [AxisState::HOMED; 3];
            info!("simulated printer homed at {}ms", now_ms);
        }
        if now_ms >= HEAT_DELAY_MS {
            self.hotend.target = HOTEND_TARGET;
            self.bed.target = BED_TARGET;
        }

        let dtf = dt as f32;
        self.hotend.actual = self.approach(self.hotend, HOTEND_RATE, dtf);
        self.bed.actual = self.approach(self.bed, BED_RATE, dtf);

        if self.hotend.target > 0.0 && self.hotend.actual >= self.hotend.target - 5.0 {
            self.fan = self.fan.saturating_add(1).min(100);
            self.move_head(dtf);
        }
    }

    fn approach(&mut self, reading: HeaterReading, rate: f32, dt: f32) -> f32 {
        let goal = if reading.target > 0.0 { reading.target } else { AMBIENT };
        let noise = self.rng.random_range(-0.4..0.4);
        let k = (rate * dt).min(1.0);
        reading.actual + (goal - reading.actual) * k + noise
    }

    fn move_head(&mut self, dt: f32) {
        let dx = self.waypoint.x - self.position.x;
        let dy = self.waypoint.y - self.position.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let step = HEAD_SPEED * dt;

        if dist <= step {
            self.position.x = self.waypoint.x;
            self.position.y = self.waypoint.y;
            self.waypoint = Position::new(
                self.rng.random_range(0.0..=self.bounds.x_max),
                self.rng.random_range(0.0..=self.bounds.y_max),
                self.position.z,
            );
            // next layer
            self.position.z = (self.position.z + 0.2).min(self.bounds.z_max);
            debug!("new waypoint {:?}", self.waypoint);
        } else {
            self.position.x += dx / dist * step;
            self.position.y += dy / dist * step;
        }
    }
}

impl Telemetry for SimulatedPrinter {
    fn hotend(&self) -> HeaterReading {
        self.hotend
    }

    fn bed(&self) -> HeaterReading {
        self.bed
    }

    fn fan(&self) -> FanState {
        FanState::new(self.fan)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn axis_state(&self, axis: Axis) -> AxisState {
        self.axes[axis.index()]
    }
}
