/*
 *  main.rs
 *
 *  printstat - machine controller status screen
 *
 *  Demo driver: simulated printer rendered into an in-memory framebuffer
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

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::BinaryColor;
use env_logger::Env;
use log::{debug, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use printstat::config::{self, Config, OutputConfig};
use printstat::sim::SimulatedPrinter;
use printstat::{EgCanvas, MonoFrameBuf, StatusScreen};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Blink is on for the first half of every `2 * blink_ms` period
fn blink_phase(now_ms: u64, blink_ms: u64) -> bool {
    (now_ms / blink_ms.max(1)) % 2 == 0
}

fn dump_frame(fb: &MonoFrameBuf, output: &OutputConfig, frame: u64) -> Result<()> {
    match output.pbm_path.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            fb.write_pbm(BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
            debug!("frame {} written to {}", frame, path.display());
        }
        None => {
            println!("frame {frame}");
            println!("{}", fb.to_ascii());
        }
    }
    Ok(())
}

async fn render_loop(cfg: &Config) -> Result<()> {
    let screen_cfg = cfg.screen_config();
    let output = cfg.output();
    let dump_every = output.dump_every.unwrap_or(0);
    let blink_ms = cfg.blink_ms();

    let mut screen = StatusScreen::new(&screen_cfg);
    let mut printer = SimulatedPrinter::new(cfg.seed.unwrap_or(0x5eed), screen_cfg.bounds);
    let mut fb = MonoFrameBuf::new(screen_cfg.layout.width, screen_cfg.layout.height);

    let mut ticker = tokio::time::interval(Duration::from_millis(cfg.refresh_ms()));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let start = Instant::now();

    info!(
        "Refreshing every {}ms, sampling history every {}ms",
        cfg.refresh_ms(),
        screen_cfg.interval_ms
    );

    loop {
        ticker.tick().await;
        let now_ms = start.elapsed().as_millis() as u64;
        printer.advance(now_ms);

        fb.clear_color(BinaryColor::Off);
        {
            let mut canvas = EgCanvas::new(&mut fb);
            screen.refresh(&mut canvas, &printer, now_ms, blink_phase(now_ms, blink_ms))?;
        }

        let frame = screen.frames();
        if dump_every > 0 && frame % dump_every == 0 {
            dump_frame(&fb, &output, frame)?;
        }
        if output.max_frames.is_some_and(|max| frame >= max) {
            info!("Rendered {} frames, stopping", frame);
            return Ok(());
        }
    }
}

#[cfg(unix)]
async fn signal_handler() -> Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}

#[cfg(not(unix))]
async fn signal_handler() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received. Initiating graceful shutdown.");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = config::load()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} status screen", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    tokio::select! {
        res = render_loop(&cfg) => res?,
        res = signal_handler() => res?,
    }

    info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_phase() {
        assert!(blink_phase(0, 500));
        assert!(blink_phase(499, 500));
        assert!(!blink_phase(500, 500));
        assert!(blink_phase(1000, 500));
        assert!(!blink_phase(3, 0));
    }
}
