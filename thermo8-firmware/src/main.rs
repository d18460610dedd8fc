//! Thermo8 - temperature alert demo
//!
//! Brings up the sensor on I2C0 (GP4 = SDA, GP5 = SCL) with its ALERT line
//! on GP6, programs it from sensor.toml and then polls the alert line,
//! reporting which limit was crossed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::I2c;
use embassy_time::{Duration, Timer};
use thermo8_driver::{AlertStatus, Thermo8};
use thermo8_hal::{DelayMs, I2cBus, I2cConfig, InputPin};
use thermo8_hal_rp2040::{i2c, AlertInput, BlockingI2c, EmbassyDelay};
use {defmt_rtt as _, panic_probe as _};

/// Sensor setup generated from sensor.toml by build.rs
mod config {
    include!(concat!(env!("OUT_DIR"), "/sensor_config.rs"));
}

/// How often the alert line is checked
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Thermo8 demo starting...");

    let p = embassy_rp::init(Default::default());

    let bus_config = i2c::config(I2cConfig {
        frequency: config::I2C_FREQUENCY_HZ,
    });
    let bus = BlockingI2c::new(I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, bus_config));
    let alert = AlertInput::new(p.PIN_6);

    let mut sensor = Thermo8::new_i2c(bus, config::SENSOR.address, alert, EmbassyDelay);

    match sensor.probe() {
        Ok(revision) => info!(
            "Thermo8 found at {=u8:#x}, revision {}",
            config::SENSOR.address,
            revision
        ),
        Err(e) => {
            // Nothing useful to do without the sensor
            error!("Thermo8 probe failed: {}", e);
            loop {
                Timer::after(POLL_INTERVAL).await;
            }
        }
    }

    if let Err(e) = sensor.configure(&config::SENSOR) {
        warn!("Failed to configure sensor: {}", e);
    }
    info!(
        "Limits: low {} C, high {} C, critical {} C, hysteresis {} C",
        config::SENSOR.lower_limit_c,
        config::SENSOR.upper_limit_c,
        config::SENSOR.critical_limit_c,
        config::SENSOR.hysteresis.celsius()
    );
    info!(
        "Resolution: {} C per step, {} ms per conversion",
        config::SENSOR.resolution.step_celsius(),
        config::SENSOR.resolution.conversion_time_ms()
    );

    loop {
        Timer::after(POLL_INTERVAL).await;
        poll(&mut sensor);
    }
}

/// Check the alert line once and report what it means
fn poll<B, PIN, D>(sensor: &mut Thermo8<thermo8_driver::I2cInterface<B>, PIN, D>)
where
    B: I2cBus,
    PIN: InputPin,
    D: DelayMs,
{
    let temperature = match sensor.temperature() {
        Ok(t) => t,
        Err(e) => {
            warn!("Temperature read failed: {}", e);
            return;
        }
    };

    if !sensor.alert_asserted() {
        debug!("Temperature: {} C", temperature);
        return;
    }

    match sensor.alert_status() {
        Some(AlertStatus { critical: true, .. }) => {
            warn!("Temperature is critical: {} C", temperature)
        }
        Some(AlertStatus { upper: true, .. }) => {
            warn!("Temperature is over the high limit: {} C", temperature)
        }
        Some(AlertStatus { lower: true, .. }) => {
            warn!("Temperature is under the low limit: {} C", temperature)
        }
        _ => info!("Alert asserted at {} C with no limit flag set", temperature),
    }
}
