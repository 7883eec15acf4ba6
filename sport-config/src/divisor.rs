//! CLKDIV / FSDIV arithmetic.
//!
//! Serial clock = SCLK / (CLKDIV + 1). Frame sync period = FSDIV + 1 serial
//! clocks.

/// CLKDIV for the fastest serial clock not above `bit_clock_hz`.
///
/// `None` if `bit_clock_hz` is zero or the divisor does not fit in 16 bits.
pub const fn clock_divisor(sclk_hz: u32, bit_clock_hz: u32) -> Option<u16> {
    if bit_clock_hz == 0 || sclk_hz < bit_clock_hz {
        return None;
    }

    let ratio = sclk_hz.div_ceil(bit_clock_hz);
    if ratio - 1 > u16::MAX as u32 {
        None
    } else {
        Some((ratio - 1) as u16)
    }
}

/// FSDIV for a frame of `clocks_per_frame` serial clocks.
pub const fn frame_sync_divisor(clocks_per_frame: u32) -> Option<u16> {
    if clocks_per_frame == 0 || clocks_per_frame - 1 > u16::MAX as u32 {
        None
    } else {
        Some((clocks_per_frame - 1) as u16)
    }
}

/// Serial clock produced by `clock_divisor`.
pub const fn serial_clock_hz(sclk_hz: u32, clock_divisor: u16) -> u32 {
    sclk_hz / (clock_divisor as u32 + 1)
}

/// Frame rate produced by the two divisors.
pub const fn frame_rate_hz(sclk_hz: u32, clock_divisor: u16, frame_sync_divisor: u16) -> u32 {
    serial_clock_hz(sclk_hz, clock_divisor) / (frame_sync_divisor as u32 + 1)
}
