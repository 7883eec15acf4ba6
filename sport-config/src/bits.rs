//! Bit positions and masks of the SPORT and DMA configuration registers.
//!
//! Names follow the hardware reference manual mnemonics. Every image in this
//! crate is assembled from these positions and nothing else.

///////////////////////////////////////////////////////////////////////
// SPORT_CTL_A / SPORT_CTL_B

pub const BITP_SPORT_CTL_SPENPRI: u32 = 0;
pub const BITP_SPORT_CTL_DTYPE: u32 = 1;
pub const BITP_SPORT_CTL_LSBF: u32 = 3;
pub const BITP_SPORT_CTL_SLEN: u32 = 4;
pub const BITP_SPORT_CTL_PACK: u32 = 9;
pub const BITP_SPORT_CTL_ICLK: u32 = 10;
pub const BITP_SPORT_CTL_OPMODE: u32 = 11;
pub const BITP_SPORT_CTL_CKRE: u32 = 12;
pub const BITP_SPORT_CTL_FSR: u32 = 13;
pub const BITP_SPORT_CTL_IFS: u32 = 14;
pub const BITP_SPORT_CTL_DIFS: u32 = 15;
pub const BITP_SPORT_CTL_LFS: u32 = 16;
pub const BITP_SPORT_CTL_LAFS: u32 = 17;
pub const BITP_SPORT_CTL_RJUST: u32 = 18;
pub const BITP_SPORT_CTL_FSED: u32 = 19;
pub const BITP_SPORT_CTL_TFIEN: u32 = 20;
pub const BITP_SPORT_CTL_GCLKEN: u32 = 21;
pub const BITP_SPORT_CTL_SPENSEC: u32 = 24;
pub const BITP_SPORT_CTL_SPTRAN: u32 = 25;
pub const BITP_SPORT_CTL_DERRSEC: u32 = 26;
pub const BITP_SPORT_CTL_DXSSEC: u32 = 27;
pub const BITP_SPORT_CTL_DERRPRI: u32 = 29;
pub const BITP_SPORT_CTL_DXSPRI: u32 = 30;

pub const BITM_SPORT_CTL_SPENPRI: u32 = 0x0000_0001;
pub const BITM_SPORT_CTL_DTYPE: u32 = 0x0000_0006;
pub const BITM_SPORT_CTL_LSBF: u32 = 0x0000_0008;
pub const BITM_SPORT_CTL_SLEN: u32 = 0x0000_01f0;
pub const BITM_SPORT_CTL_PACK: u32 = 0x0000_0200;
pub const BITM_SPORT_CTL_ICLK: u32 = 0x0000_0400;
pub const BITM_SPORT_CTL_OPMODE: u32 = 0x0000_0800;
pub const BITM_SPORT_CTL_CKRE: u32 = 0x0000_1000;
pub const BITM_SPORT_CTL_FSR: u32 = 0x0000_2000;
pub const BITM_SPORT_CTL_IFS: u32 = 0x0000_4000;
pub const BITM_SPORT_CTL_DIFS: u32 = 0x0000_8000;
pub const BITM_SPORT_CTL_LFS: u32 = 0x0001_0000;
pub const BITM_SPORT_CTL_LAFS: u32 = 0x0002_0000;
pub const BITM_SPORT_CTL_RJUST: u32 = 0x0004_0000;
pub const BITM_SPORT_CTL_FSED: u32 = 0x0008_0000;
pub const BITM_SPORT_CTL_TFIEN: u32 = 0x0010_0000;
pub const BITM_SPORT_CTL_GCLKEN: u32 = 0x0020_0000;
pub const BITM_SPORT_CTL_SPENSEC: u32 = 0x0100_0000;
pub const BITM_SPORT_CTL_SPTRAN: u32 = 0x0200_0000;
pub const BITM_SPORT_CTL_DERRSEC: u32 = 0x0400_0000;
pub const BITM_SPORT_CTL_DXSSEC: u32 = 0x1800_0000;
pub const BITM_SPORT_CTL_DERRPRI: u32 = 0x2000_0000;
pub const BITM_SPORT_CTL_DXSPRI: u32 = 0xc000_0000;

/// Status bits of SPORT_CTL. Read-only or write-one-to-clear, never part of a
/// configuration image.
pub const BITM_SPORT_CTL_STATUS: u32 =
    BITM_SPORT_CTL_DERRSEC | BITM_SPORT_CTL_DXSSEC | BITM_SPORT_CTL_DERRPRI | BITM_SPORT_CTL_DXSPRI;

///////////////////////////////////////////////////////////////////////
// SPORT_DIV_A / SPORT_DIV_B

pub const BITP_SPORT_DIV_CLKDIV: u32 = 0;
pub const BITP_SPORT_DIV_FSDIV: u32 = 16;

pub const BITM_SPORT_DIV_CLKDIV: u32 = 0x0000_ffff;
pub const BITM_SPORT_DIV_FSDIV: u32 = 0xffff_0000;

///////////////////////////////////////////////////////////////////////
// SPORT_MCTL_A / SPORT_MCTL_B

pub const BITP_SPORT_MCTL_MCE: u32 = 0;
pub const BITP_SPORT_MCTL_MCPDE: u32 = 2;
pub const BITP_SPORT_MCTL_MFD: u32 = 4;
pub const BITP_SPORT_MCTL_WSIZE: u32 = 8;
pub const BITP_SPORT_MCTL_WOFFSET: u32 = 16;

pub const BITM_SPORT_MCTL_MCE: u32 = 0x0000_0001;
pub const BITM_SPORT_MCTL_MCPDE: u32 = 0x0000_0004;
pub const BITM_SPORT_MCTL_MFD: u32 = 0x0000_00f0;
pub const BITM_SPORT_MCTL_WSIZE: u32 = 0x0000_7f00;
pub const BITM_SPORT_MCTL_WOFFSET: u32 = 0x03ff_0000;

///////////////////////////////////////////////////////////////////////
// DMA_CFG, burst size fields only

pub const BITP_DMA_CFG_PSIZE: u32 = 4;
pub const BITP_DMA_CFG_MSIZE: u32 = 8;

pub const BITM_DMA_CFG_PSIZE: u32 = 0x0000_0070;
pub const BITM_DMA_CFG_MSIZE: u32 = 0x0000_0700;

/// Places `value` at bit position `position`, dropping anything outside `mask`.
#[inline]
pub const fn field(value: u32, position: u32, mask: u32) -> u32 {
    (value << position) & mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_agree_with_positions() {
        let pairs = [
            (BITP_SPORT_CTL_SPENPRI, BITM_SPORT_CTL_SPENPRI),
            (BITP_SPORT_CTL_DTYPE,   BITM_SPORT_CTL_DTYPE),
            (BITP_SPORT_CTL_SLEN,    BITM_SPORT_CTL_SLEN),
            (BITP_SPORT_CTL_GCLKEN,  BITM_SPORT_CTL_GCLKEN),
            (BITP_SPORT_CTL_SPTRAN,  BITM_SPORT_CTL_SPTRAN),
            (BITP_SPORT_CTL_DXSSEC,  BITM_SPORT_CTL_DXSSEC),
            (BITP_SPORT_CTL_DXSPRI,  BITM_SPORT_CTL_DXSPRI),
            (BITP_SPORT_DIV_FSDIV,   BITM_SPORT_DIV_FSDIV),
            (BITP_SPORT_MCTL_MFD,    BITM_SPORT_MCTL_MFD),
            (BITP_SPORT_MCTL_WSIZE,  BITM_SPORT_MCTL_WSIZE),
            (BITP_SPORT_MCTL_WOFFSET, BITM_SPORT_MCTL_WOFFSET),
            (BITP_DMA_CFG_PSIZE,     BITM_DMA_CFG_PSIZE),
            (BITP_DMA_CFG_MSIZE,     BITM_DMA_CFG_MSIZE),
        ];

        for (position, mask) in pairs {
            assert_eq!(mask.trailing_zeros(), position, "mask {mask:#010x}");
        }
    }

    #[test]
    fn ctl_masks_do_not_overlap() {
        let masks = [
            BITM_SPORT_CTL_SPENPRI, BITM_SPORT_CTL_DTYPE, BITM_SPORT_CTL_LSBF, BITM_SPORT_CTL_SLEN,
            BITM_SPORT_CTL_PACK, BITM_SPORT_CTL_ICLK, BITM_SPORT_CTL_OPMODE, BITM_SPORT_CTL_CKRE,
            BITM_SPORT_CTL_FSR, BITM_SPORT_CTL_IFS, BITM_SPORT_CTL_DIFS, BITM_SPORT_CTL_LFS,
            BITM_SPORT_CTL_LAFS, BITM_SPORT_CTL_RJUST, BITM_SPORT_CTL_FSED, BITM_SPORT_CTL_TFIEN,
            BITM_SPORT_CTL_GCLKEN, BITM_SPORT_CTL_SPENSEC, BITM_SPORT_CTL_SPTRAN, BITM_SPORT_CTL_DERRSEC,
            BITM_SPORT_CTL_DXSSEC, BITM_SPORT_CTL_DERRPRI, BITM_SPORT_CTL_DXSPRI,
        ];

        let mut seen = 0u32;
        for mask in masks {
            assert_eq!(seen & mask, 0, "mask {mask:#010x} overlaps");
            seen |= mask;
        }

        // Bits 23:22 are reserved.
        assert_eq!(seen, !0x00c0_0000);
    }

    #[test]
    fn field_truncates_to_mask() {
        assert_eq!(field(0x3f, BITP_SPORT_CTL_SLEN, BITM_SPORT_CTL_SLEN), 0x1f0);
        assert_eq!(field(0xffff, BITP_SPORT_DIV_FSDIV, BITM_SPORT_DIV_FSDIV), 0xffff_0000);
    }
}
