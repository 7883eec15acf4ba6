//! Named values of the individual SPORT and DMA configuration fields.

use modular_bitfield_msb::prelude::*;

/// SPORT_CTL.DTYPE: Data Type
///
/// Formatting applied to words narrower than the 32-bit data registers, or
/// the companding law for 8-bit words.
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=2]
pub enum DataType {
    RightJustifyZeroFill = 0b00,
    RightJustifySignExtend = 0b01,
    MuLaw = 0b10,
    ALaw = 0b11,
}

/// SPORT_CTL.LSBF: Least-Significant Bit First
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum BitOrder {
    MsbFirst = 0,
    LsbFirst = 1,
}

/// SPORT_CTL.RJUST: Right-Justified Operation
///
/// Only meaningful in the I2S / left-justified family of modes (OPMODE = 1).
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum Justification {
    Left = 0,
    Right = 1,
}

/// SPORT_CTL.ICLK: Internal Clock
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum ClockSource {
    /// Serial clock is an input on the SPORT_CLK pin.
    External = 0,
    /// Serial clock is generated from SCLK through SPORT_DIV.CLKDIV.
    Internal = 1,
}

/// SPORT_CTL.CKRE: Clock Rising Edge
///
/// Edge on which data and frame sync are sampled. The opposite edge drives.
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum ClockEdge {
    Falling = 0,
    Rising = 1,
}

/// SPORT_CTL.IFS: Internal Frame Sync
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum FrameSyncSource {
    External = 0,
    /// Frame sync is generated from the serial clock through SPORT_DIV.FSDIV.
    Internal = 1,
}

/// SPORT_CTL.LFS: Active-Low Frame Sync
///
/// In I2S and left-justified modes this bit instead selects which channel
/// leads the frame (0: left channel while frame sync is low).
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum FrameSyncPolarity {
    ActiveHigh = 0,
    ActiveLow = 1,
}

/// SPORT_CTL.LAFS: Late Frame Sync
///
/// Only meaningful in DSP serial and multichannel modes. In the OPMODE = 1
/// modes the same bit distinguishes I2S from left-justified framing.
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum FrameSyncTiming {
    /// Frame sync precedes the first data bit by one serial clock.
    Early = 0,
    /// Frame sync is asserted together with the first data bit.
    Late = 1,
}

/// SPORT_CTL.SPTRAN: Serial Port Transfer Direction
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=1]
pub enum Direction {
    Receive = 0,
    Transmit = 1,
}

/// Framing of the half-SPORT.
///
/// This is not a single register field: it selects SPORT_CTL.OPMODE and, for
/// the OPMODE = 1 modes, SPORT_CTL.LAFS. TDM shares the DSP serial encoding
/// in SPORT_CTL; its windowing lives in SPORT_MCTL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperatingMode {
    Dsp,
    Tdm,
    I2s,
    LeftJustified,
}

impl OperatingMode {
    /// Value of SPORT_CTL.OPMODE.
    pub const fn opmode(self) -> u32 {
        match self {
            OperatingMode::Dsp | OperatingMode::Tdm => 0,
            OperatingMode::I2s | OperatingMode::LeftJustified => 1,
        }
    }

    /// Value of SPORT_CTL.LAFS, given the frame sync timing that applies in the
    /// DSP serial and TDM modes.
    pub const fn lafs(self, timing: FrameSyncTiming) -> u32 {
        match self {
            OperatingMode::Dsp | OperatingMode::Tdm => timing as u32,
            OperatingMode::I2s => 0,
            OperatingMode::LeftJustified => 1,
        }
    }
}

/// DMA_CFG.MSIZE: memory-side transfer unit.
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=3]
pub enum MemoryTransferSize {
    Bytes1 = 0,
    Bytes2 = 1,
    Bytes4 = 2,
    Bytes8 = 3,
    Bytes16 = 4,
    Bytes32 = 5,
}

impl MemoryTransferSize {
    pub const fn bytes(self) -> u32 {
        1 << (self as u32)
    }
}

/// DMA_CFG.PSIZE: peripheral-side transfer unit.
#[derive(Copy, Clone, BitfieldSpecifier, Debug, PartialEq, Eq)]
#[bits=3]
pub enum PeripheralTransferSize {
    Bytes1 = 0,
    Bytes2 = 1,
    Bytes4 = 2,
    Bytes8 = 3,
}

impl PeripheralTransferSize {
    pub const fn bytes(self) -> u32 {
        1 << (self as u32)
    }
}
