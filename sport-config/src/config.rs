//! Per-instance configuration record and its packing into register images.
//!
//! Everything here is `const fn`: the images in [`crate::table`] are computed
//! by the compiler and end up in the binary as plain integers. Out-of-range
//! field values are rejected by `assert!` during const evaluation, which
//! turns them into build errors.

use crate::bits::*;
use crate::field::*;

/// Serial clock setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    pub source: ClockSource,
    pub edge: ClockEdge,
    /// SPORT_DIV.CLKDIV. Serial clock = SCLK / (CLKDIV + 1). Ignored for an
    /// external clock.
    pub divisor: u16,
    /// SPORT_CTL.GCLKEN: clock runs only while data is being transferred.
    pub gated: bool,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        source: ClockSource::External,
        edge: ClockEdge::Falling,
        divisor: 0,
        gated: false,
    };
}

/// Frame sync setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSyncConfig {
    pub source: FrameSyncSource,
    pub polarity: FrameSyncPolarity,
    pub timing: FrameSyncTiming,
    /// SPORT_CTL.FSR: a frame sync is required for every word.
    pub required: bool,
    /// SPORT_CTL.DIFS: generate frame syncs whether or not data is ready.
    pub data_independent: bool,
    /// SPORT_CTL.FSED: frame sync is edge- rather than level-detected.
    pub edge_detect: bool,
    /// SPORT_DIV.FSDIV. Frame period = FSDIV + 1 serial clocks. Ignored for an
    /// external frame sync.
    pub divisor: u16,
}

impl FrameSyncConfig {
    pub const DEFAULT: Self = Self {
        source: FrameSyncSource::External,
        polarity: FrameSyncPolarity::ActiveHigh,
        timing: FrameSyncTiming::Early,
        required: false,
        data_independent: false,
        edge_detect: false,
        divisor: 0,
    };
}

/// Multichannel (TDM) windowing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MultichannelConfig {
    /// SPORT_MCTL.MCE
    pub enable: bool,
    /// SPORT_MCTL.MCPDE: only the selected channels occupy DMA buffer slots.
    pub packing: bool,
    /// SPORT_MCTL.WOFFSET: first channel of the window, 0..=1023.
    pub window_offset: u16,
    /// Channels in the window, 1..=128. Stored in SPORT_MCTL.WSIZE minus one.
    pub window_size: u8,
    /// SPORT_MCTL.MFD: serial clocks between frame sync and channel 0, 0..=15.
    pub frame_delay: u8,
    /// SPORT_CS0..SPORT_CS3: one bit per channel, channel 0 in CS0 bit 0.
    pub channel_select: [u32; 4],
}

impl MultichannelConfig {
    pub const DEFAULT: Self = Self {
        enable: false,
        packing: false,
        window_offset: 0,
        window_size: 1,
        frame_delay: 0,
        channel_select: [0; 4],
    };
}

/// Burst sizes of the DMA channel servicing the half-SPORT.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DmaBurst {
    pub memory: MemoryTransferSize,
    pub peripheral: PeripheralTransferSize,
}

impl DmaBurst {
    pub const DEFAULT: Self = Self {
        memory: MemoryTransferSize::Bytes4,
        peripheral: PeripheralTransferSize::Bytes4,
    };

    /// MSIZE and PSIZE placed in a DMA_CFG image. All other DMA_CFG fields are
    /// zero and left to the driver.
    pub const fn cfg(&self) -> u32 {
        field(self.peripheral as u32, BITP_DMA_CFG_PSIZE, BITM_DMA_CFG_PSIZE)
            | field(self.memory as u32, BITP_DMA_CFG_MSIZE, BITM_DMA_CFG_MSIZE)
    }
}

/// Static configuration of one half-SPORT.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SportConfig {
    /// Instance is active and should be programmed and enabled at startup.
    pub enabled: bool,
    pub direction: Direction,
    pub mode: OperatingMode,
    pub data_type: DataType,
    pub bit_order: BitOrder,
    /// Serial word length in bits, 4..=32. Stored in SPORT_CTL.SLEN minus one.
    pub word_length: u8,
    /// SPORT_CTL.PACK: two 16-bit words per 32-bit data register access.
    pub pack: bool,
    pub justification: Justification,
    pub clock: ClockConfig,
    pub frame_sync: FrameSyncConfig,
    /// Secondary data channel is enabled alongside the primary.
    pub secondary_enable: bool,
    /// SPORT_CTL.TFIEN: transmit finish interrupt instead of DMA completion.
    pub transmit_finish_interrupt: bool,
    pub multichannel: MultichannelConfig,
    pub dma: DmaBurst,
}

impl SportConfig {
    /// Reset-like configuration of an unused instance: inactive, 32-bit words,
    /// external clock and frame sync, DSP serial receive.
    pub const DEFAULT: Self = Self {
        enabled: false,
        direction: Direction::Receive,
        mode: OperatingMode::Dsp,
        data_type: DataType::RightJustifyZeroFill,
        bit_order: BitOrder::MsbFirst,
        word_length: 32,
        pack: false,
        justification: Justification::Left,
        clock: ClockConfig::DEFAULT,
        frame_sync: FrameSyncConfig::DEFAULT,
        secondary_enable: false,
        transmit_finish_interrupt: false,
        multichannel: MultichannelConfig::DEFAULT,
        dma: DmaBurst::DEFAULT,
    };

    /// SPORT_CTL image with SPENPRI and SPENSEC clear.
    pub const fn ctl(&self) -> u32 {
        assert!(self.word_length >= 4 && self.word_length <= 32, "word_length in 4..=32");

        field(self.data_type as u32,                    BITP_SPORT_CTL_DTYPE,   BITM_SPORT_CTL_DTYPE)
        | field(self.bit_order as u32,                  BITP_SPORT_CTL_LSBF,    BITM_SPORT_CTL_LSBF)
        | field(self.word_length as u32 - 1,            BITP_SPORT_CTL_SLEN,    BITM_SPORT_CTL_SLEN)
        | field(self.pack as u32,                       BITP_SPORT_CTL_PACK,    BITM_SPORT_CTL_PACK)
        | field(self.clock.source as u32,               BITP_SPORT_CTL_ICLK,    BITM_SPORT_CTL_ICLK)
        | field(self.mode.opmode(),                     BITP_SPORT_CTL_OPMODE,  BITM_SPORT_CTL_OPMODE)
        | field(self.clock.edge as u32,                 BITP_SPORT_CTL_CKRE,    BITM_SPORT_CTL_CKRE)
        | field(self.frame_sync.required as u32,        BITP_SPORT_CTL_FSR,     BITM_SPORT_CTL_FSR)
        | field(self.frame_sync.source as u32,          BITP_SPORT_CTL_IFS,     BITM_SPORT_CTL_IFS)
        | field(self.frame_sync.data_independent as u32, BITP_SPORT_CTL_DIFS,   BITM_SPORT_CTL_DIFS)
        | field(self.frame_sync.polarity as u32,        BITP_SPORT_CTL_LFS,     BITM_SPORT_CTL_LFS)
        | field(self.mode.lafs(self.frame_sync.timing), BITP_SPORT_CTL_LAFS,    BITM_SPORT_CTL_LAFS)
        | field(self.justification as u32,              BITP_SPORT_CTL_RJUST,   BITM_SPORT_CTL_RJUST)
        | field(self.frame_sync.edge_detect as u32,     BITP_SPORT_CTL_FSED,    BITM_SPORT_CTL_FSED)
        | field(self.transmit_finish_interrupt as u32,  BITP_SPORT_CTL_TFIEN,   BITM_SPORT_CTL_TFIEN)
        | field(self.clock.gated as u32,                BITP_SPORT_CTL_GCLKEN,  BITM_SPORT_CTL_GCLKEN)
        | field(self.direction as u32,                  BITP_SPORT_CTL_SPTRAN,  BITM_SPORT_CTL_SPTRAN)
    }

    /// Enable bits to OR into the CTL image once everything else is written.
    pub const fn ctl_enable_bits(&self) -> u32 {
        let secondary = if self.secondary_enable { BITM_SPORT_CTL_SPENSEC } else { 0 };
        BITM_SPORT_CTL_SPENPRI | secondary
    }

    /// SPORT_DIV image.
    pub const fn div(&self) -> u32 {
        field(self.clock.divisor as u32,      BITP_SPORT_DIV_CLKDIV, BITM_SPORT_DIV_CLKDIV)
        | field(self.frame_sync.divisor as u32, BITP_SPORT_DIV_FSDIV, BITM_SPORT_DIV_FSDIV)
    }

    /// SPORT_MCTL image.
    pub const fn mctl(&self) -> u32 {
        let m = &self.multichannel;
        assert!(m.window_size >= 1 && m.window_size <= 128, "window_size in 1..=128");
        assert!(m.window_offset <= 1023, "window_offset in 0..=1023");
        assert!(m.frame_delay <= 15, "frame_delay in 0..=15");

        field(m.enable as u32,             BITP_SPORT_MCTL_MCE,     BITM_SPORT_MCTL_MCE)
        | field(m.packing as u32,          BITP_SPORT_MCTL_MCPDE,   BITM_SPORT_MCTL_MCPDE)
        | field(m.frame_delay as u32,      BITP_SPORT_MCTL_MFD,     BITM_SPORT_MCTL_MFD)
        | field(m.window_size as u32 - 1,  BITP_SPORT_MCTL_WSIZE,   BITM_SPORT_MCTL_WSIZE)
        | field(m.window_offset as u32,    BITP_SPORT_MCTL_WOFFSET, BITM_SPORT_MCTL_WOFFSET)
    }

    /// SPORT_CS0..SPORT_CS3 images.
    pub const fn cs(&self) -> [u32; 4] {
        self.multichannel.channel_select
    }

    /// DMA_CFG burst size bits.
    pub const fn dma_cfg(&self) -> u32 {
        self.dma.cfg()
    }

    pub const fn image(&self) -> RegisterImage {
        RegisterImage {
            ctl: self.ctl(),
            div: self.div(),
            mctl: self.mctl(),
            cs: self.cs(),
            enable: self.ctl_enable_bits(),
        }
    }
}

/// Register values written to one half-SPORT at initialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterImage {
    /// SPORT_CTL with the enable bits clear.
    pub ctl: u32,
    pub div: u32,
    pub mctl: u32,
    pub cs: [u32; 4],
    /// Enable bits applied by the final CTL write.
    pub enable: u32,
}

impl RegisterImage {
    /// Final SPORT_CTL write that starts the half-SPORT.
    pub const fn ctl_enabled(&self) -> u32 {
        self.ctl | self.enable
    }
}

/// Channel-select masks for `count` consecutive channels starting at `first`,
/// relative to the start of the multichannel window.
pub const fn channel_select(first: u32, count: u32) -> [u32; 4] {
    assert!(count <= 128 && first <= 128 - count, "channels within 0..128");

    let mut masks = [0u32; 4];
    let mut channel = first;
    while channel < first + count {
        masks[(channel / 32) as usize] |= 1 << (channel % 32);
        channel += 1;
    }
    masks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_images() {
        let image = SportConfig::DEFAULT.image();
        assert_eq!(image.ctl, 0x0000_01f0);
        assert_eq!(image.div, 0);
        assert_eq!(image.mctl, 0);
        assert_eq!(image.cs, [0; 4]);
        assert_eq!(image.enable, BITM_SPORT_CTL_SPENPRI);
    }

    #[test]
    fn ctl_is_or_of_fields() {
        let config = SportConfig {
            direction: Direction::Transmit,
            data_type: DataType::ALaw,
            bit_order: BitOrder::LsbFirst,
            word_length: 8,
            ..SportConfig::DEFAULT
        };

        let expected = (1 << BITP_SPORT_CTL_SPTRAN)
            | (0b11 << BITP_SPORT_CTL_DTYPE)
            | (1 << BITP_SPORT_CTL_LSBF)
            | (7 << BITP_SPORT_CTL_SLEN);
        assert_eq!(config.ctl(), expected);
        assert_eq!(config.ctl(), 0x0200_007e);
    }

    #[test]
    fn ctl_never_carries_enable_or_status() {
        let config = SportConfig {
            enabled: true,
            secondary_enable: true,
            ..SportConfig::DEFAULT
        };

        assert_eq!(config.ctl() & (BITM_SPORT_CTL_SPENPRI | BITM_SPORT_CTL_SPENSEC), 0);
        assert_eq!(config.ctl() & BITM_SPORT_CTL_STATUS, 0);
        assert_eq!(config.image().ctl_enabled(), config.ctl() | 0x0100_0001);
    }

    #[test]
    fn left_justified_sets_lafs_regardless_of_timing() {
        let config = SportConfig {
            mode: OperatingMode::LeftJustified,
            frame_sync: FrameSyncConfig { timing: FrameSyncTiming::Early, ..FrameSyncConfig::DEFAULT },
            ..SportConfig::DEFAULT
        };

        assert_eq!(config.ctl() & (BITM_SPORT_CTL_OPMODE | BITM_SPORT_CTL_LAFS), 0x0002_0800);
    }

    #[test]
    fn div_packs_both_divisors() {
        let config = SportConfig {
            clock: ClockConfig { divisor: 0x1234, ..ClockConfig::DEFAULT },
            frame_sync: FrameSyncConfig { divisor: 0xabcd, ..FrameSyncConfig::DEFAULT },
            ..SportConfig::DEFAULT
        };

        assert_eq!(config.div(), 0xabcd_1234);
    }

    #[test]
    fn mctl_window_encoding() {
        let config = SportConfig {
            multichannel: MultichannelConfig {
                enable: true,
                packing: true,
                window_offset: 1023,
                window_size: 128,
                frame_delay: 15,
                channel_select: [0; 4],
            },
            ..SportConfig::DEFAULT
        };

        assert_eq!(config.mctl(), 0x03ff_7ff5);
    }

    #[test]
    #[should_panic(expected="word_length in 4..=32")]
    fn word_length_too_short() {
        let config = SportConfig { word_length: 3, ..SportConfig::DEFAULT };
        let _ = config.ctl();
    }

    #[test]
    #[should_panic(expected="window_size in 1..=128")]
    fn window_size_zero() {
        let config = SportConfig {
            multichannel: MultichannelConfig { window_size: 0, ..MultichannelConfig::DEFAULT },
            ..SportConfig::DEFAULT
        };
        let _ = config.mctl();
    }

    #[test]
    fn dma_burst_bits() {
        let burst = DmaBurst {
            memory: MemoryTransferSize::Bytes32,
            peripheral: PeripheralTransferSize::Bytes2,
        };
        assert_eq!(burst.cfg(), 0x0000_0510);
        assert_eq!(DmaBurst::DEFAULT.cfg(), 0x0000_0220);
    }

    #[test]
    fn channel_select_spans_registers() {
        assert_eq!(channel_select(0, 0), [0, 0, 0, 0]);
        assert_eq!(channel_select(0, 8), [0x0000_00ff, 0, 0, 0]);
        assert_eq!(channel_select(30, 4), [0xc000_0000, 0x0000_0003, 0, 0]);
        assert_eq!(channel_select(0, 128), [0xffff_ffff; 4]);
        assert_eq!(channel_select(127, 1), [0, 0, 0, 0x8000_0000]);
    }

    #[test]
    #[should_panic(expected="channels within 0..128")]
    fn channel_select_overflow() {
        let _ = channel_select(120, 9);
    }

    #[test]
    #[should_panic(expected="channels within 0..128")]
    fn channel_select_first_near_u32_max() {
        let _ = channel_select(u32::MAX, 1);
    }

    #[test]
    #[should_panic(expected="channels within 0..128")]
    fn channel_select_count_near_u32_max() {
        let _ = channel_select(1, u32::MAX);
    }
}
