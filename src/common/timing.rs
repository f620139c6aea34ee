// src/common/timing.rs

use core::time::Duration;

// Nominal values from the Alphasense SPI interface notes (072-0502, 072-0503).
// All waits are issued through the injected `OpcTimer`.

// === Handshake Timing ===

/// Nominal wait after each busy/ready poll.
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// The device needs at least 10 ms between polls.
pub const POLL_INTERVAL_MIN: Duration = Duration::from_millis(10);
/// Polls spaced more than 100 ms apart may be taken as a new command.
pub const POLL_INTERVAL_MAX: Duration = Duration::from_millis(100);

/// Hold time after a protocol error, lets the device drop its buffered data (> 2 s, < 10 s).
pub const SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Wait after each payload byte clocked in or out.
pub const INTER_BYTE_DELAY: Duration = Duration::from_micros(10);

// === Retry Policy ===

/// Busy polls after which every further poll is preceded by `SETTLE_DELAY`
/// so the device SPI buffer can reset.
pub const BUFFER_RESET_AFTER_ATTEMPTS: u32 = 20;
/// Busy polls after which the command is abandoned with a timeout.
pub const MAX_ATTEMPTS: u32 = 25;
