//! Board configuration of every half-SPORT, and the register images derived
//! from it.
//!
//! SPORT0 and SPORT1 carry the codec links, SPORT2 the auxiliary converter
//! and the companded voice channel. All other halves are unused and keep
//! [`SportConfig::DEFAULT`].

use crate::config::*;
use crate::field::*;
use crate::instance::{ChipFamily, Half, SportId};

/// 32-bit I2S transmit to the DAC, SPORT generates both clocks.
pub const SPORT_0A: SportConfig = SportConfig {
    enabled: true,
    direction: Direction::Transmit,
    mode: OperatingMode::I2s,
    word_length: 32,
    clock: ClockConfig {
        source: ClockSource::Internal,
        edge: ClockEdge::Rising,
        divisor: 3,
        gated: false,
    },
    frame_sync: FrameSyncConfig {
        source: FrameSyncSource::Internal,
        required: true,
        data_independent: true,
        divisor: 63,
        ..FrameSyncConfig::DEFAULT
    },
    ..SportConfig::DEFAULT
};

/// 32-bit I2S receive from the ADC, clocked by the converter.
pub const SPORT_0B: SportConfig = SportConfig {
    enabled: true,
    direction: Direction::Receive,
    mode: OperatingMode::I2s,
    word_length: 32,
    clock: ClockConfig {
        edge: ClockEdge::Rising,
        ..ClockConfig::DEFAULT
    },
    frame_sync: FrameSyncConfig {
        required: true,
        ..FrameSyncConfig::DEFAULT
    },
    ..SportConfig::DEFAULT
};

const TDM8: MultichannelConfig = MultichannelConfig {
    enable: true,
    packing: true,
    window_offset: 0,
    window_size: 8,
    frame_delay: 1,
    channel_select: channel_select(0, 8),
};

const TDM8_DMA: DmaBurst = DmaBurst {
    memory: MemoryTransferSize::Bytes32,
    peripheral: PeripheralTransferSize::Bytes4,
};

/// TDM8 transmit, 8 x 32-bit slots, SPORT is clock and frame master.
pub const SPORT_1A: SportConfig = SportConfig {
    enabled: true,
    direction: Direction::Transmit,
    mode: OperatingMode::Tdm,
    word_length: 32,
    clock: ClockConfig {
        source: ClockSource::Internal,
        edge: ClockEdge::Rising,
        divisor: 1,
        gated: false,
    },
    frame_sync: FrameSyncConfig {
        source: FrameSyncSource::Internal,
        timing: FrameSyncTiming::Early,
        required: true,
        data_independent: true,
        divisor: 255,
        ..FrameSyncConfig::DEFAULT
    },
    multichannel: TDM8,
    dma: TDM8_DMA,
    ..SportConfig::DEFAULT
};

/// TDM8 receive, clocked by the 1A link partner.
pub const SPORT_1B: SportConfig = SportConfig {
    enabled: true,
    direction: Direction::Receive,
    mode: OperatingMode::Tdm,
    word_length: 32,
    clock: ClockConfig {
        edge: ClockEdge::Rising,
        ..ClockConfig::DEFAULT
    },
    frame_sync: FrameSyncConfig {
        timing: FrameSyncTiming::Early,
        required: true,
        ..FrameSyncConfig::DEFAULT
    },
    multichannel: TDM8,
    dma: TDM8_DMA,
    ..SportConfig::DEFAULT
};

/// 24-bit left-justified transmit to the auxiliary converter.
pub const SPORT_2A: SportConfig = SportConfig {
    enabled: true,
    direction: Direction::Transmit,
    mode: OperatingMode::LeftJustified,
    word_length: 24,
    clock: ClockConfig {
        source: ClockSource::Internal,
        edge: ClockEdge::Rising,
        divisor: 7,
        gated: false,
    },
    frame_sync: FrameSyncConfig {
        source: FrameSyncSource::Internal,
        required: true,
        data_independent: true,
        divisor: 63,
        ..FrameSyncConfig::DEFAULT
    },
    ..SportConfig::DEFAULT
};

/// 8-bit mu-law voice receive, DSP serial framing with an active-low late
/// frame sync.
pub const SPORT_2B: SportConfig = SportConfig {
    enabled: true,
    direction: Direction::Receive,
    mode: OperatingMode::Dsp,
    data_type: DataType::MuLaw,
    word_length: 8,
    frame_sync: FrameSyncConfig {
        polarity: FrameSyncPolarity::ActiveLow,
        timing: FrameSyncTiming::Late,
        required: true,
        ..FrameSyncConfig::DEFAULT
    },
    dma: DmaBurst {
        memory: MemoryTransferSize::Bytes1,
        peripheral: PeripheralTransferSize::Bytes1,
    },
    ..SportConfig::DEFAULT
};

pub const SPORT_3A: SportConfig = SportConfig::DEFAULT;
pub const SPORT_3B: SportConfig = SportConfig::DEFAULT;
pub const SPORT_4A: SportConfig = SportConfig::DEFAULT;
pub const SPORT_4B: SportConfig = SportConfig::DEFAULT;
pub const SPORT_5A: SportConfig = SportConfig::DEFAULT;
pub const SPORT_5B: SportConfig = SportConfig::DEFAULT;
pub const SPORT_6A: SportConfig = SportConfig::DEFAULT;
pub const SPORT_6B: SportConfig = SportConfig::DEFAULT;
pub const SPORT_7A: SportConfig = SportConfig::DEFAULT;
pub const SPORT_7B: SportConfig = SportConfig::DEFAULT;

pub const SPORT_0A_IMAGE: RegisterImage = SPORT_0A.image();
pub const SPORT_0B_IMAGE: RegisterImage = SPORT_0B.image();
pub const SPORT_1A_IMAGE: RegisterImage = SPORT_1A.image();
pub const SPORT_1B_IMAGE: RegisterImage = SPORT_1B.image();
pub const SPORT_2A_IMAGE: RegisterImage = SPORT_2A.image();
pub const SPORT_2B_IMAGE: RegisterImage = SPORT_2B.image();
pub const SPORT_3A_IMAGE: RegisterImage = SPORT_3A.image();
pub const SPORT_3B_IMAGE: RegisterImage = SPORT_3B.image();
pub const SPORT_4A_IMAGE: RegisterImage = SPORT_4A.image();
pub const SPORT_4B_IMAGE: RegisterImage = SPORT_4B.image();
pub const SPORT_5A_IMAGE: RegisterImage = SPORT_5A.image();
pub const SPORT_5B_IMAGE: RegisterImage = SPORT_5B.image();
pub const SPORT_6A_IMAGE: RegisterImage = SPORT_6A.image();
pub const SPORT_6B_IMAGE: RegisterImage = SPORT_6B.image();
pub const SPORT_7A_IMAGE: RegisterImage = SPORT_7A.image();
pub const SPORT_7B_IMAGE: RegisterImage = SPORT_7B.image();

/// A half-SPORT together with its configuration and images.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SportInstance {
    pub id: SportId,
    pub config: SportConfig,
    pub image: RegisterImage,
}

impl SportInstance {
    const fn new(sport: u8, half: Half, config: SportConfig, image: RegisterImage) -> Self {
        Self {
            id: SportId::new(sport, half),
            config,
            image,
        }
    }
}

/// All half-SPORTs in [`SportId::index`] order.
pub static INSTANCES: [SportInstance; SportId::COUNT * 2] = [
    SportInstance::new(0, Half::A, SPORT_0A, SPORT_0A_IMAGE),
    SportInstance::new(0, Half::B, SPORT_0B, SPORT_0B_IMAGE),
    SportInstance::new(1, Half::A, SPORT_1A, SPORT_1A_IMAGE),
    SportInstance::new(1, Half::B, SPORT_1B, SPORT_1B_IMAGE),
    SportInstance::new(2, Half::A, SPORT_2A, SPORT_2A_IMAGE),
    SportInstance::new(2, Half::B, SPORT_2B, SPORT_2B_IMAGE),
    SportInstance::new(3, Half::A, SPORT_3A, SPORT_3A_IMAGE),
    SportInstance::new(3, Half::B, SPORT_3B, SPORT_3B_IMAGE),
    SportInstance::new(4, Half::A, SPORT_4A, SPORT_4A_IMAGE),
    SportInstance::new(4, Half::B, SPORT_4B, SPORT_4B_IMAGE),
    SportInstance::new(5, Half::A, SPORT_5A, SPORT_5A_IMAGE),
    SportInstance::new(5, Half::B, SPORT_5B, SPORT_5B_IMAGE),
    SportInstance::new(6, Half::A, SPORT_6A, SPORT_6A_IMAGE),
    SportInstance::new(6, Half::B, SPORT_6B, SPORT_6B_IMAGE),
    SportInstance::new(7, Half::A, SPORT_7A, SPORT_7A_IMAGE),
    SportInstance::new(7, Half::B, SPORT_7B, SPORT_7B_IMAGE),
];

impl ChipFamily {
    /// Half-SPORTs implemented by this family.
    pub fn instances(self) -> &'static [SportInstance] {
        &INSTANCES[..self.half_count()]
    }

    /// Active half-SPORTs implemented by this family.
    pub fn enabled(self) -> impl Iterator<Item = &'static SportInstance> {
        self.instances().iter().filter(|instance| instance.config.enabled)
    }
}

/// Looks up one half-SPORT, or `None` if `family` does not implement it.
pub fn instance(id: SportId, family: ChipFamily) -> Option<&'static SportInstance> {
    if family.contains(id) {
        Some(&INSTANCES[id.index()])
    } else {
        None
    }
}
