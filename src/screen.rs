/*
 *  screen.rs
 *
 *  printstat - machine controller status screen
 *
 *  Status screen refresh: owns the history and draws every panel
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

use log::debug;

use crate::axis::{AxisReadout, HomedUnknownPolicy};
use crate::canvas::Canvas;
use crate::constants::{GRAPH_WIDTH, SAMPLE_INTERVAL_MS};
use crate::gauge::FanGauge;
use crate::graph::TempGraph;
use crate::heater::HeaterPanel;
use crate::history::{Channel, Sample, TemperatureHistory};
use crate::icons::{IconSelector, IconStyle};
use crate::layout::ScreenLayout;
use crate::position::{Bounds, PositionIndicator};
use crate::telemetry::{Axis, Telemetry};

/// Everything needed to build a [`StatusScreen`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    pub layout: ScreenLayout,
    pub history_width: usize,
    pub interval_ms: u64,
    pub bounds: Bounds,
    pub icons: IconStyle,
    pub homed_unknown: HomedUnknownPolicy,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            layout: ScreenLayout::default(),
            history_width: GRAPH_WIDTH,
            interval_ms: SAMPLE_INTERVAL_MS,
            bounds: Bounds::default(),
            icons: IconStyle::default(),
            homed_unknown: HomedUnknownPolicy::default(),
        }
    }
}

/// The whole status screen.
///
/// `refresh` takes `&mut self`: the sampler state lives here and one
/// refresh must finish before the next starts.
#[derive(Debug, Clone)]
pub struct StatusScreen {
    history: TemperatureHistory,
    heaters: HeaterPanel,
    axes: AxisReadout,
    position: PositionIndicator,
    gauge: FanGauge,
    heater_graph: TempGraph,
    bed_graph: TempGraph,
    frames: u64,
}

impl StatusScreen {
    pub fn new(config: &ScreenConfig) -> Self {
        let l = &config.layout;
        debug!(
            "status screen: {}x{}, history {} slots every {}ms",
            l.width, l.height, config.history_width, config.interval_ms
        );
        Self {
            history: TemperatureHistory::new(config.history_width, config.interval_ms),
            heaters: HeaterPanel::new(l.heaters, IconSelector::new(config.icons), l.font_width),
            axes: AxisReadout::new(l.axes, config.homed_unknown),
            position: PositionIndicator::new(l.position, config.bounds),
            gauge: FanGauge::new(l.gauge),
            heater_graph: TempGraph::for_channel(&l.graphs, Channel::Heater),
            bed_graph: TempGraph::for_channel(&l.graphs, Channel::Bed),
            frames: 0,
        }
    }

    pub fn history(&self) -> &TemperatureHistory {
        &self.history
    }

    /// Completed refreshes
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draws one frame onto `canvas`, which is expected to be cleared.
    ///
    /// Panels are drawn first, then a history sample is taken if due, then
    /// both graphs from the updated history.
    pub fn refresh<C, T>(
        &mut self,
        canvas: &mut C,
        telemetry: &T,
        now_ms: u64,
        blink: bool,
    ) -> Result<(), C::Error>
    where
        C: Canvas,
        T: Telemetry + ?Sized,
    {
        let hotend = telemetry.hotend();
        let bed = telemetry.bed();

        self.heaters.render(canvas, &hotend, &bed)?;
        for axis in Axis::ALL {
            self.axes.render(canvas, telemetry.coordinate(axis), blink)?;
        }
        self.position.render(canvas, telemetry.position())?;
        self.gauge.render(canvas, telemetry.fan().percent())?;

        self.history
            .tick(now_ms, Sample::from_reading(&hotend), Sample::from_reading(&bed));

        for (graph, channel) in [
            (&self.heater_graph, Channel::Heater),
            (&self.bed_graph, Channel::Bed),
        ] {
            if let Some(range) = self.history.range(channel) {
                graph.render(canvas, self.history.buffer(channel), range)?;
            }
            graph.render_border(canvas)?;
        }

        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Point;

    use crate::canvas::{DrawOp, RecordingCanvas};
    use crate::telemetry::{AxisState, FanState, HeaterReading, Position, TelemetrySnapshot};

    fn snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot {
            hotend: HeaterReading::new(180.0, 200.0),
            bed: HeaterReading::new(55.0, 60.0),
            fan: FanState::new(50),
            position: Position::new(100.0, 100.0, 10.0),
            axes: [AxisState::HOMED; 3],
        }
    }

    #[test]
    fn test_first_refresh_samples_after_interval() {
        let mut screen = StatusScreen::new(&ScreenConfig::default());
        let mut canvas = RecordingCanvas::new();

        screen.refresh(&mut canvas, &snapshot(), 0, false).unwrap();
        assert_eq!(screen.history().buffer(Channel::Heater).filled(), 0);

        screen.refresh(&mut canvas, &snapshot(), 3000, false).unwrap();
        assert_eq!(screen.history().buffer(Channel::Heater).filled(), 1);
        assert_eq!(screen.frames(), 2);
    }

    #[test]
    fn test_empty_history_draws_only_borders() {
        let mut screen = StatusScreen::new(&ScreenConfig::default());
        let mut canvas = RecordingCanvas::new();
        screen.refresh(&mut canvas, &snapshot(), 0, false).unwrap();

        // the XY head dot is the only pixel
        assert_eq!(canvas.pixels(), vec![Point::new(109, 44)]);
        assert!(canvas.ops().contains(&DrawOp::Line(Point::new(32, 0), Point::new(32, 21))));
        assert!(canvas.ops().contains(&DrawOp::Line(Point::new(32, 23), Point::new(32, 44))));
    }

    #[test]
    fn test_graphs_follow_samples() {
        let mut screen = StatusScreen::new(&ScreenConfig::default());
        let mut canvas = RecordingCanvas::new();
        screen.refresh(&mut canvas, &snapshot(), 3000, false).unwrap();

        // head dot plus actual/target for both channels in the newest column
        let pixels = canvas.pixels();
        assert_eq!(pixels.len(), 5);
        assert_eq!(pixels.iter().filter(|p| p.x == 33 + 45).count(), 4);
    }

    #[test]
    fn test_refresh_draws_all_axes() {
        let mut screen = StatusScreen::new(&ScreenConfig::default());
        let mut canvas = RecordingCanvas::new();
        screen.refresh(&mut canvas, &snapshot(), 0, false).unwrap();

        let labels: Vec<&str> = canvas.texts_at_x(80).into_iter().map(|(_, t)| t).collect();
        assert_eq!(labels, vec!["X: ", "Y: ", "Z: "]);
        assert!(canvas.contains_text("10.0"));
    }
}
