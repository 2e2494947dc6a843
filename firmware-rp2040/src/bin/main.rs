#![no_std]
#![no_main]

use defmt::{debug, error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{Blocking, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Ticker, Timer};
use extension_rp2040::{
    Axis, Error, ExtensionController, I2cTransport, Snapshot, BAD_REPORT_LIMIT, I2C_FREQUENCY_HZ,
    POLL_INTERVAL_MS, RETRY_INTERVAL_MS,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

type BoardTransport = I2cTransport<I2c<'static, I2C0, Blocking>, Delay>;

/// Signal for passing the latest report from the poll task to the report task.
static SNAPSHOT_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, Snapshot>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Extension reader starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let signal = SNAPSHOT_SIGNAL.init(Signal::new());

    // --- I2C Setup ---
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;

    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_5, // SCL
        p.PIN_4, // SDA
        i2c_config,
    );
    let session = ExtensionController::new(I2cTransport::new(i2c, Delay));

    // LED for error indication (on-board LED on Pico)
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(poll_task(session, signal, led).unwrap());
    spawner.spawn(report_task(signal).unwrap());

    info!("Extension reader initialized, waiting for a controller...");
}

/// Poll task - connects the controller and signals every verified report.
#[embassy_executor::task]
async fn poll_task(
    mut session: ExtensionController<'static, BoardTransport>,
    signal: &'static Signal<CriticalSectionRawMutex, Snapshot>,
    mut led: Output<'static>,
) {
    loop {
        if let Err(e) = session.reconnect() {
            debug!("Connect failed: {:?}", e);
            Timer::after_millis(RETRY_INTERVAL_MS).await;
            continue;
        }
        info!("Controller connected: {}", session.controller_type());
        led.set_low();

        let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
        loop {
            ticker.next().await;
            match session.update() {
                Ok(()) => signal.signal(Snapshot::capture(&session)),
                Err(Error::BadData) if session.consecutive_bad_reports() < BAD_REPORT_LIMIT => {
                    warn!("Discarding bad report");
                }
                Err(e) => {
                    error!("Controller lost: {:?}", e);
                    // Toggle LED to indicate error
                    led.toggle();
                    break;
                }
            }
        }
    }
}

/// Report task - waits for snapshots and logs the decoded controls.
#[embassy_executor::task]
async fn report_task(signal: &'static Signal<CriticalSectionRawMutex, Snapshot>) {
    loop {
        let snapshot = signal.wait().await;
        match (
            snapshot.axis(Axis::LeftJoyX),
            snapshot.axis(Axis::LeftJoyY),
        ) {
            (Some(x), Some(y)) => info!(
                "{}: stick=({}, {}) buttons={=u32:#b}",
                snapshot.controller,
                x,
                y,
                snapshot.pressed()
            ),
            _ => info!("{}: raw={:02x}", snapshot.controller, snapshot.report()),
        }
    }
}
