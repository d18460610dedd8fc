//! Build script for thermo8-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates sensor.toml at compile time and bakes it into the binary

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thermo8_driver::{ConfigError, Thermo8Config};

/// Highest bus clock the RP2040 I2C block supports (fast-mode plus)
const MAX_FREQUENCY_HZ: u32 = 1_000_000;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SensorFile {
    #[serde(default)]
    bus: BusSection,
    #[serde(default)]
    sensor: Thermo8Config,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BusSection {
    frequency_hz: u32,
}

impl Default for BusSection {
    fn default() -> Self {
        Self {
            frequency_hz: 100_000,
        }
    }
}

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate sensor.toml and write it out as Rust constants
fn generate_config() {
    println!("cargo:rerun-if-changed=sensor.toml");

    let config_path = Path::new("sensor.toml");
    if !config_path.exists() {
        fail(
            "sensor.toml not found",
            &["The firmware requires a sensor.toml next to Cargo.toml".to_string()],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read sensor.toml", &[e.to_string()]),
    };

    let file: SensorFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => fail(
            "Invalid sensor.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = validate(&file);
    if !errors.is_empty() {
        fail("Invalid sensor configuration", &errors);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("sensor_config.rs"), render(&file)).unwrap();

    println!("cargo:warning=sensor.toml validated successfully");
}

/// Collect every problem with the file
fn validate(file: &SensorFile) -> Vec<String> {
    let mut errors = Vec::new();

    if file.bus.frequency_hz == 0 || file.bus.frequency_hz > MAX_FREQUENCY_HZ {
        errors.push(format!(
            "[bus] frequency_hz must be 1-{}",
            MAX_FREQUENCY_HZ
        ));
    }

    match file.sensor.validate() {
        Ok(()) => {}
        Err(ConfigError::AddressOutOfRange(addr)) => {
            errors.push(format!("[sensor] address {:#04x} must be 0x18-0x1f", addr));
        }
        Err(ConfigError::LimitOutOfRange) => {
            errors.push("[sensor] limits must be within -40.0..=125.0".to_string());
        }
        Err(ConfigError::LimitOrder) => {
            errors.push(
                "[sensor] limits must satisfy lower < upper <= critical".to_string(),
            );
        }
    }

    errors
}

/// Render the validated file as constants for `include!`
fn render(file: &SensorFile) -> String {
    let s = &file.sensor;
    let mut out = String::new();

    writeln!(out, "// Generated by build.rs from sensor.toml").unwrap();
    writeln!(out, "pub const I2C_FREQUENCY_HZ: u32 = {};", file.bus.frequency_hz).unwrap();
    writeln!(out, "pub const SENSOR: thermo8_driver::Thermo8Config = thermo8_driver::Thermo8Config {{").unwrap();
    writeln!(out, "    address: {:#04x},", s.address).unwrap();
    writeln!(out, "    resolution: thermo8_driver::Resolution::{:?},", s.resolution).unwrap();
    writeln!(out, "    lower_limit_c: {:?},", s.lower_limit_c).unwrap();
    writeln!(out, "    upper_limit_c: {:?},", s.upper_limit_c).unwrap();
    writeln!(out, "    critical_limit_c: {:?},", s.critical_limit_c).unwrap();
    writeln!(out, "    hysteresis: thermo8_driver::Hysteresis::{:?},", s.hysteresis).unwrap();
    writeln!(out, "    alert_mode: thermo8_driver::AlertMode::{:?},", s.alert_mode).unwrap();
    writeln!(out, "    alerts_enabled: {},", s.alerts_enabled).unwrap();
    writeln!(out, "    lock_critical: {},", s.lock_critical).unwrap();
    writeln!(out, "    lock_window: {},", s.lock_window).unwrap();
    writeln!(out, "}};").unwrap();

    out
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let line = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
