use serde::{Deserialize, Serialize};
use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use log::warn;
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::axis::HomedUnknownPolicy;
use crate::icons::IconStyle;
use crate::position::Bounds;
use crate::screen::ScreenConfig;

/// Largest history window that still fits beside the heater panel
pub const MAX_HISTORY_WIDTH: usize = 80;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration. Every field is optional so layers can be
/// merged; unset fields fall back to the screen defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub log_level: Option<String>,      // "info" | "debug" | ...
    pub refresh_ms: Option<u64>,        // screen refresh period
    pub blink_ms: Option<u64>,          // half-period of the axis blink
    pub seed: Option<u64>,              // simulated printer rng seed
    pub history: Option<HistoryConfig>,
    pub bounds: Option<Bounds>,
    pub icons: Option<IconStyle>,
    pub homed_unknown: Option<HomedUnknownPolicy>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HistoryConfig {
    pub width: Option<usize>,
    pub interval_ms: Option<u64>,
}

/// Where rendered frames go
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub dump_every: Option<u64>,     // ASCII dump every N frames, 0 = never
    pub pbm_path: Option<PathBuf>,   // rewrite this PBM file on each dump
    pub max_frames: Option<u64>,     // stop after N frames
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "printstat", about = "Machine controller status screen", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub refresh_ms: Option<u64>,
    #[arg(long)]
    pub blink_ms: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub history_width: Option<usize>,
    #[arg(long)]
    pub history_interval_ms: Option<u64>,
    #[arg(long, action = ArgAction::Set)]
    pub animated_icons: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub heat_percent: Option<bool>,
    #[arg(long)]
    pub dump_every: Option<u64>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub pbm_path: Option<PathBuf>,
    #[arg(long)]
    pub max_frames: Option<u64>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();

    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    if let Some(home) = home_dir() {
        let p = home.join(".config/printstat/config.yaml");
        if p.exists() { return Some(p) }
    }
    for candidate in &["printstat.yaml", "config/printstat.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
pub fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some()      { dst.log_level = src.log_level; }
    if src.refresh_ms.is_some()     { dst.refresh_ms = src.refresh_ms; }
    if src.blink_ms.is_some()       { dst.blink_ms = src.blink_ms; }
    if src.seed.is_some()           { dst.seed = src.seed; }
    if src.bounds.is_some()         { dst.bounds = src.bounds; }
    if src.icons.is_some()          { dst.icons = src.icons; }
    if src.homed_unknown.is_some()  { dst.homed_unknown = src.homed_unknown; }
    match (&mut dst.history, src.history) {
        (None, Some(h)) => dst.history = Some(h),
        (Some(d), Some(s)) => merge_history(d, s),
        _ => {}
    }
    match (&mut dst.output, src.output) {
        (None, Some(o)) => dst.output = Some(o),
        (Some(d), Some(s)) => merge_output(d, s),
        _ => {}
    }
}

fn merge_history(dst: &mut HistoryConfig, src: HistoryConfig) {
    if src.width.is_some()        { dst.width = src.width; }
    if src.interval_ms.is_some()  { dst.interval_ms = src.interval_ms; }
}

fn merge_output(dst: &mut OutputConfig, src: OutputConfig) {
    if src.dump_every.is_some()  { dst.dump_every = src.dump_every; }
    if src.pbm_path.is_some()    { dst.pbm_path = src.pbm_path; }
    if src.max_frames.is_some()  { dst.max_frames = src.max_frames; }
}

pub fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()   { cfg.log_level = cli.log_level.clone(); }
    if cli.refresh_ms.is_some()  { cfg.refresh_ms = cli.refresh_ms; }
    if cli.blink_ms.is_some()    { cfg.blink_ms = cli.blink_ms; }
    if cli.seed.is_some()        { cfg.seed = cli.seed; }

    if cli.history_width.is_some() || cli.history_interval_ms.is_some() {
        let history = cfg.history.get_or_insert_with(HistoryConfig::default);
        if cli.history_width.is_some()        { history.width = cli.history_width; }
        if cli.history_interval_ms.is_some()  { history.interval_ms = cli.history_interval_ms; }
    }

    if cli.animated_icons.is_some() || cli.heat_percent.is_some() {
        let icons = cfg.icons.get_or_insert_with(IconStyle::default);
        if let Some(a) = cli.animated_icons  { icons.animated = a; }
        if let Some(h) = cli.heat_percent    { icons.heat_percent = h; }
    }

    if cli.dump_every.is_some() || cli.pbm_path.is_some() || cli.max_frames.is_some() {
        let output = cfg.output.get_or_insert_with(OutputConfig::default);
        if cli.dump_every.is_some()  { output.dump_every = cli.dump_every; }
        if cli.pbm_path.is_some()    { output.pbm_path = cli.pbm_path.clone(); }
        if cli.max_frames.is_some()  { output.max_frames = cli.max_frames; }
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(history) = cfg.history.as_ref() {
        if let Some(w) = history.width {
            if w == 0 || w > MAX_HISTORY_WIDTH {
                return Err(ConfigError::Validation(format!(
                    "history width must be 1..={MAX_HISTORY_WIDTH}"
                )));
            }
        }
        if history.interval_ms == Some(0) {
            return Err(ConfigError::Validation("history interval_ms must be > 0".into()));
        }
    }
    if let Some(b) = cfg.bounds.as_ref() {
        if b.x_max <= 0.0 || b.y_max <= 0.0 || b.z_max <= 0.0 {
            return Err(ConfigError::Validation("bounds must be > 0 on every axis".into()));
        }
    }
    if cfg.refresh_ms == Some(0) {
        return Err(ConfigError::Validation("refresh_ms must be > 0".into()));
    }
    if cfg.blink_ms == Some(0) {
        return Err(ConfigError::Validation("blink_ms must be > 0".into()));
    }
    Ok(())
}

impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn refresh_ms(&self) -> u64 {
        self.refresh_ms.unwrap_or(100)
    }

    pub fn blink_ms(&self) -> u64 {
        self.blink_ms.unwrap_or(500)
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    /// Screen parameters with unset fields taken from the defaults
    pub fn screen_config(&self) -> ScreenConfig {
        let mut sc = ScreenConfig::default();
        if let Some(history) = self.history.as_ref() {
            if let Some(w) = history.width { sc.history_width = w; }
            if let Some(i) = history.interval_ms { sc.interval_ms = i; }
        }
        if let Some(b) = self.bounds { sc.bounds = b; }
        if let Some(i) = self.icons { sc.icons = i; }
        if let Some(p) = self.homed_unknown { sc.homed_unknown = p; }
        if sc.history_width as i32 > sc.layout.width as i32 - sc.layout.graphs.x_origin {
            warn!(
                "history width {} runs past the display edge",
                sc.history_width
            );
        }
        sc
    }
}
