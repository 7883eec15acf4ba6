#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

//! Typed views of the SPORT and DMA configuration registers.
//!
//! Fields are declared most-significant first, matching the bit tables of the
//! hardware reference manual. Conversions to and from `u32` go through
//! big-endian bytes so that the first declared field lands in bit 31.

use modular_bitfield_msb::prelude::*;

use crate::field::*;

macro_rules! register_u32 {
    ($name:ident) => {
        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self::from_bytes(value.to_be_bytes())
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                u32::from_be_bytes(value.into_bytes())
            }
        }
    };
}

/// SPORT Control Register (SPORT_CTL_A, SPORT_CTL_B)
///
/// * DXSPRI, DXSSEC: Data Transfer Buffer Status (read-only)
/// * DERRPRI, DERRSEC: Data Error Status (write-one-to-clear)
/// * SPTRAN: Serial Port Transfer Direction
/// * SPENSEC, SPENPRI: Secondary / Primary Channel Enable
/// * GCLKEN: Gated Clock Enable
/// * TFIEN: Transmit Finish Interrupt Enable
/// * FSED: Frame Sync Edge Detect
/// * RJUST: Right-Justified Operation Mode
/// * LAFS: Late Frame Sync (OPMODE = 0) or Left-Justified select (OPMODE = 1)
/// * LFS: Active-Low Frame Sync (OPMODE = 0) or Left channel First (OPMODE = 1)
/// * DIFS: Data-Independent Frame Sync
/// * IFS: Internal Frame Sync
/// * FSR: Frame Sync Required
/// * CKRE: Clock Rising Edge
/// * OPMODE: Operation Mode, DSP serial / multichannel (0) or I2S family (1)
/// * ICLK: Internal Clock
/// * PACK: 16-bit to 32-bit Packing Enable
/// * SLEN: Serial Word Length, bits minus one
/// * LSBF: Least-Significant Bit First
/// * DTYPE: Data Type
///
#[bitfield(bits=32)]
#[derive(Copy, Clone, Debug)]
pub struct SportCtl {
    pub DXSPRI: B2,
    pub DERRPRI: B1,
    pub DXSSEC: B2,
    pub DERRSEC: B1,
    pub SPTRAN: Direction,
    pub SPENSEC: B1,
    #[skip] __: B2,
    pub GCLKEN: B1,
    pub TFIEN: B1,
    pub FSED: B1,
    pub RJUST: Justification,
    pub LAFS: B1,
    pub LFS: FrameSyncPolarity,
    pub DIFS: B1,
    pub IFS: FrameSyncSource,
    pub FSR: B1,
    pub CKRE: ClockEdge,
    pub OPMODE: B1,
    pub ICLK: ClockSource,
    pub PACK: B1,
    pub SLEN: B5,
    pub LSBF: BitOrder,
    pub DTYPE: DataType,
    pub SPENPRI: B1,
}

register_u32!(SportCtl);

/// SPORT Divisor Register (SPORT_DIV_A, SPORT_DIV_B)
///
/// * FSDIV: Frame Sync Divisor, serial clocks per frame minus one
/// * CLKDIV: Clock Divisor, SCLK cycles per serial clock minus one
///
#[bitfield(bits=32)]
#[derive(Copy, Clone, Debug)]
pub struct SportDiv {
    pub FSDIV: B16,
    pub CLKDIV: B16,
}

register_u32!(SportDiv);

/// SPORT Multichannel Control Register (SPORT_MCTL_A, SPORT_MCTL_B)
///
/// * WOFFSET: Window Offset
/// * WSIZE: Window Size, channels minus one
/// * MFD: Multichannel Frame Delay
/// * MCPDE: Multichannel Packing DMA Enable
/// * MCE: Multichannel Enable
///
#[bitfield(bits=32)]
#[derive(Copy, Clone, Debug)]
pub struct SportMctl {
    #[skip] __: B6,
    pub WOFFSET: B10,
    #[skip] __: B1,
    pub WSIZE: B7,
    pub MFD: B4,
    #[skip] __: B1,
    pub MCPDE: B1,
    #[skip] __: B1,
    pub MCE: B1,
}

register_u32!(SportMctl);

/// DMA Channel Configuration Register (DMA_CFG), burst size view
///
/// Only the fields a static SPORT configuration decides are named. Descriptor
/// flow, interrupt and trigger fields belong to the DMA driver.
///
/// * MSIZE: Memory Transfer Word Size
/// * PSIZE: Peripheral Transfer Word Size
/// * WNR: Write/Read Channel Direction
/// * EN: DMA Channel Enable
///
#[bitfield(bits=32)]
#[derive(Copy, Clone, Debug)]
pub struct DmaCfg {
    #[skip] __: B21,
    pub MSIZE: MemoryTransferSize,
    #[skip] __: B1,
    pub PSIZE: PeripheralTransferSize,
    #[skip] __: B2,
    pub WNR: B1,
    pub EN: B1,
}

register_u32!(DmaCfg);

///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::*;

    #[test]
    fn sport_ctl_is_msb_first() {
        let dut = SportCtl::new()
            .with_SPTRAN(Direction::Transmit)
            .with_SLEN(31)
            .with_DTYPE(DataType::MuLaw)
            .with_SPENPRI(1)
            ;

        assert_eq!(u32::from(dut), 0x0200_01f5);
    }

    #[test]
    fn sport_ctl_decode() {
        let dut = SportCtl::from(BITM_SPORT_CTL_ICLK | BITM_SPORT_CTL_LFS | (15 << BITP_SPORT_CTL_SLEN));

        assert_eq!(dut.ICLK(), ClockSource::Internal);
        assert_eq!(dut.LFS(), FrameSyncPolarity::ActiveLow);
        assert_eq!(dut.SLEN(), 15);
        assert_eq!(dut.SPTRAN(), Direction::Receive);
        assert_eq!(dut.CKRE(), ClockEdge::Falling);
    }

    #[test]
    fn sport_div_halves() {
        let dut = SportDiv::from(0x003f_0003);

        assert_eq!(dut.FSDIV(), 63);
        assert_eq!(dut.CLKDIV(), 3);
        assert_eq!(u32::from(SportDiv::new().with_FSDIV(0xffff)), BITM_SPORT_DIV_FSDIV);
    }

    #[test]
    fn sport_mctl_fields() {
        let dut = SportMctl::new()
            .with_WOFFSET(0x155)
            .with_WSIZE(7)
            .with_MFD(1)
            .with_MCPDE(1)
            .with_MCE(1)
            ;

        assert_eq!(u32::from(dut), 0x0155_0715);
    }

    #[test]
    fn dma_cfg_burst_sizes() {
        let dut = DmaCfg::new()
            .with_MSIZE(MemoryTransferSize::Bytes32)
            .with_PSIZE(PeripheralTransferSize::Bytes4)
            ;

        assert_eq!(u32::from(dut), 0x0000_0520);

        let back = DmaCfg::from(0x0000_0310);
        assert_eq!(back.MSIZE(), MemoryTransferSize::Bytes8);
        assert_eq!(back.PSIZE(), PeripheralTransferSize::Bytes2);
    }
}
