/*
 *  history.rs
 *
 *  printstat - machine controller status screen
 *
 *  Rolling temperature history feeding the status graphs
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

use crate::scale::ScaleRange;
use crate::telemetry::HeaterReading;

/// Actual and target temperature for one history slot, whole degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    pub actual: i16,
    pub target: i16,
}

impl Sample {
    pub fn new(actual: i16, target: i16) -> Self {
        Self { actual, target }
    }

    /// Truncates toward zero, the way the controller reports whole degrees.
    pub fn from_reading(reading: &HeaterReading) -> Self {
        Self {
            actual: reading.actual as i16,
            target: reading.target as i16,
        }
    }
}

/// Fixed-width sample window.
///
/// Slot `width - 1` always holds the newest sample and `width - filled` the
/// oldest one still valid. Slots below that have never been written and are
/// not exposed.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    slots: Vec<Sample>,
    filled: usize,
}

impl HistoryBuffer {
    pub fn new(width: usize) -> Self {
        Self {
            slots: vec![Sample::default(); width.max(1)],
            filled: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.slots.len()
    }

    /// Index of the oldest valid slot
    pub fn first_populated(&self) -> usize {
        self.slots.len() - self.filled
    }

    /// Populated slots only
    pub fn get(&self, index: usize) -> Option<Sample> {
        if index >= self.first_populated() {
            self.slots.get(index).copied()
        } else {
            None
        }
    }

    pub fn latest(&self) -> Option<Sample> {
        if self.is_empty() { None } else { self.slots.last().copied() }
    }

    /// `(slot index, sample)` from oldest to newest
    pub fn populated(&self) -> impl Iterator<Item = (usize, Sample)> + '_ {
        let start = self.first_populated();
        self.slots[start..]
            .iter()
            .enumerate()
            .map(move |(i, s)| (start + i, *s))
    }

    /// Ages every valid sample one slot toward index 0 and stores `sample`
    /// in the last slot. Once full the oldest sample falls off the front.
    pub fn push(&mut self, sample: Sample) {
        let w = self.slots.len();
        self.filled = (self.filled + 1).min(w);
        let start = w - self.filled;
        self.slots.copy_within(start + 1..w, start);
        self.slots[w - 1] = sample;
    }
}

/// The two tracked temperature families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Heater,
    Bed,
}

/// Time-gated sampler driving the heater and bed histories together.
///
/// Both families share one clock so their graphs stay aligned column for
/// column. The scale ranges are refreshed whenever a sample lands.
#[derive(Debug, Clone)]
pub struct TemperatureHistory {
    heater: HistoryBuffer,
    bed: HistoryBuffer,
    heater_range: Option<ScaleRange>,
    bed_range: Option<ScaleRange>,
    interval_ms: u64,
    last_sample_ms: u64,
}

impl TemperatureHistory {
    pub fn new(width: usize, interval_ms: u64) -> Self {
        Self {
            heater: HistoryBuffer::new(width),
            bed: HistoryBuffer::new(width),
            heater_range: None,
            bed_range: None,
            interval_ms,
            last_sample_ms: 0,
        }
    }

    pub fn buffer(&self, channel: Channel) -> &HistoryBuffer {
        match channel {
            Channel::Heater => &self.heater,
            Channel::Bed => &self.bed,
        }
    }

    /// `None` until the first sample has been taken
    pub fn range(&self, channel: Channel) -> Option<ScaleRange> {
        match channel {
            Channel::Heater => self.heater_range,
            Channel::Bed => self.bed_range,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_sample_ms(&self) -> u64 {
        self.last_sample_ms
    }

    /// Records one sample per family if `interval_ms` has elapsed since the
    /// previous one. Returns whether a sample was taken.
    pub fn tick(&mut self, now_ms: u64, heater: Sample, bed: Sample) -> bool {
        if now_ms.saturating_sub(self.last_sample_ms) < self.interval_ms {
            return false;
        }

        self.heater.push(heater);
        self.bed.push(bed);
        self.last_sample_ms = now_ms;

        let heater_range = ScaleRange::of(&self.heater);
        let bed_range = ScaleRange::of(&self.bed);
        if heater_range != self.heater_range || bed_range != self.bed_range {
            debug!("history rescaled: heater {:?}, bed {:?}", heater_range, bed_range);
        }
        self.heater_range = heater_range;
        self.bed_range = bed_range;

        debug!(
            "history sample at {}ms, {}/{} slots filled",
            now_ms,
            self.heater.filled(),
            self.heater.width()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: i16) -> Sample {
        Sample::new(v, v + 100)
    }

    #[test]
    fn test_fill_from_empty() {
        let mut buf = HistoryBuffer::new(5);
        assert!(buf.is_empty());
        assert_eq!(buf.latest(), None);

        for k in 1..5 {
            buf.push(s(k));
            assert_eq!(buf.filled(), k as usize);
            assert_eq!(buf.latest(), Some(s(k)));
            // oldest valid slot holds the first sample ever pushed
            assert_eq!(buf.get(buf.first_populated()), Some(s(1)));
        }
        assert_eq!(buf.get(0), None);
    }

    #[test]
    fn test_saturated_window_drops_oldest() {
        let mut buf = HistoryBuffer::new(4);
        for k in 1..=4 {
            buf.push(s(k));
        }
        assert!(buf.is_full());

        let oldest = buf.get(0);
        buf.push(s(5));
        assert_eq!(buf.filled(), 4);
        assert_ne!(buf.get(0), oldest);

        let values: Vec<i16> = buf.populated().map(|(_, x)| x.actual).collect();
        assert_eq!(values, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_populated_indices() {
        let mut buf = HistoryBuffer::new(6);
        buf.push(s(7));
        buf.push(s(8));
        let idx: Vec<usize> = buf.populated().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![4, 5]);
    }

    #[test]
    fn test_width_one() {
        let mut buf = HistoryBuffer::new(1);
        buf.push(s(1));
        buf.push(s(2));
        assert_eq!(buf.filled(), 1);
        assert_eq!(buf.latest(), Some(s(2)));
    }

    #[test]
    fn test_sample_truncates_reading() {
        let sample = Sample::from_reading(&HeaterReading::new(199.9, 60.4));
        assert_eq!(sample, Sample::new(199, 60));
    }

    #[test]
    fn test_tick_is_time_gated() {
        let mut history = TemperatureHistory::new(46, 3000);

        assert!(!history.tick(0, s(20), s(20)));
        assert!(!history.tick(2999, s(20), s(20)));
        assert!(history.buffer(Channel::Heater).is_empty());
        assert_eq!(history.range(Channel::Heater), None);

        assert!(history.tick(3000, s(20), s(25)));
        assert_eq!(history.last_sample_ms(), 3000);
        assert!(!history.tick(5999, s(21), s(26)));
        assert!(history.tick(6000, s(21), s(26)));

        assert_eq!(history.buffer(Channel::Heater).filled(), 2);
        assert_eq!(history.buffer(Channel::Bed).filled(), 2);
        assert_eq!(history.buffer(Channel::Bed).latest(), Some(s(26)));
    }

    #[test]
    fn test_tick_updates_ranges() {
        let mut history = TemperatureHistory::new(46, 3000);
        history.tick(3000, Sample::new(20, 200), Sample::new(22, 60));
        history.tick(6000, Sample::new(35, 200), Sample::new(30, 60));

        let heater = history.range(Channel::Heater).unwrap();
        assert_eq!((heater.min, heater.max), (20, 200));
        let bed = history.range(Channel::Bed).unwrap();
        assert_eq!((bed.min, bed.max), (22, 60));
    }

    #[test]
    fn test_families_stay_aligned() {
        let mut history = TemperatureHistory::new(10, 3000);
        for k in 1..=25u64 {
            history.tick(k * 3000, s(k as i16), s(-(k as i16)));
        }
        let heater = history.buffer(Channel::Heater);
        let bed = history.buffer(Channel::Bed);
        assert_eq!(heater.filled(), bed.filled());
        for ((hi, h), (bi, b)) in heater.populated().zip(bed.populated()) {
            assert_eq!(hi, bi);
            assert_eq!(h.actual, -b.actual);
        }
    }
}
