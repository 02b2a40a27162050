//! Reactor configuration and identification constants.
//!
//! Fixture scripts are wired in here rather than behind compile-time
//! switches so production builds simply leave them unset.

/// Firmware version reported in the startup banner
pub const FIRMWARE_VERSION: f32 = 0.1;

/// Build number reported in the startup banner
pub const FIRMWARE_BUILD: f32 = 100.0;

/// Product name used in the banner and prompt
pub const PRODUCT_NAME: &str = "Gantry";

/// Maximum length of one input command line
pub const INPUT_LINE_LEN: usize = 255;

/// Output buffer capacity
///
/// Sized so a command-response envelope for a maximum-length input line
/// always fits, even with every character JSON-escaped.
pub const OUTPUT_BUF_LEN: usize = 768;

/// Capacity of the serial receive byte queue
///
/// Holds at least one maximum-length line plus slack; one slot is reserved
/// by the queue implementation.
pub const RX_QUEUE_LEN: usize = 512;

/// Default transmit-queue high-water mark (bytes pending)
pub const TX_HIGH_WATER_MARK: usize = 64;

/// Construction-time reactor configuration
#[derive(Debug, Clone, Copy)]
pub struct ReactorConfig<'a> {
    /// Pending-byte count at which the transmit gate backs off
    pub tx_high_water: usize,
    /// Script behind the first fixture trigger, if any
    pub fixture_a: Option<&'a [&'a str]>,
    /// Script behind the second fixture trigger, if any
    pub fixture_b: Option<&'a [&'a str]>,
}

impl Default for ReactorConfig<'_> {
    fn default() -> Self {
        Self {
            tx_high_water: TX_HIGH_WATER_MARK,
            fixture_a: None,
            fixture_b: None,
        }
    }
}
