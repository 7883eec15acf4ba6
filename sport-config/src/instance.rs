//! Half-SPORT identifiers, chip families and register addressing.

use core::fmt;
use core::str::FromStr;

use crate::Error;

pub type RegisterAddress = u32;
pub type RegisterValue = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Half {
    A,
    B,
}

impl Half {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One half of one SPORT block, e.g. "3B".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SportId {
    sport: u8,
    half: Half,
}

impl SportId {
    /// SPORT blocks on the largest family.
    pub const COUNT: usize = 8;

    pub const fn new(sport: u8, half: Half) -> Self {
        assert!((sport as usize) < Self::COUNT, "sport < SportId::COUNT");
        Self { sport, half }
    }

    pub const fn sport(&self) -> u8 {
        self.sport
    }

    pub const fn half(&self) -> Half {
        self.half
    }

    /// Position in the instance tables: 0A, 0B, 1A, ... 7B.
    pub const fn index(&self) -> usize {
        self.sport as usize * 2 + self.half.index()
    }

    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT * 2, "index < SportId::COUNT * 2");
        let half = if index % 2 == 0 { Half::A } else { Half::B };
        Self::new((index / 2) as u8, half)
    }

    pub const fn base_address(&self) -> RegisterAddress {
        Addressing::half(self.sport as usize, self.half)
    }

    pub const fn register_address(&self, register: Register) -> RegisterAddress {
        self.base_address() + register.offset()
    }
}

impl fmt::Display for SportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.sport, self.half)
    }
}

impl FromStr for SportId {
    type Err = Error;

    /// Accepts "0A" through "7B", case-insensitive, optionally prefixed with
    /// "SPORT" or "SPORT_".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let tail = if bytes.len() > 5 && bytes[..5].eq_ignore_ascii_case(b"sport") {
            let rest = &bytes[5..];
            rest.strip_prefix(b"_").unwrap_or(rest)
        } else {
            bytes
        };

        match tail {
            [digit @ b'0'..=b'7', half] => {
                let half = match half.to_ascii_uppercase() {
                    b'A' => Half::A,
                    b'B' => Half::B,
                    _ => return Err(Error::InvalidInstance),
                };
                Ok(SportId::new(digit - b'0', half))
            },
            _ => Err(Error::InvalidInstance),
        }
    }
}

/// Chip families differ in how many SPORT blocks they implement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChipFamily {
    /// SPORT0 through SPORT7.
    Sc58x,
    /// SPORT0 through SPORT3.
    Sc57x,
}

impl ChipFamily {
    pub const ALL: [ChipFamily; 2] = [ChipFamily::Sc58x, ChipFamily::Sc57x];

    pub const fn sport_count(self) -> usize {
        match self {
            ChipFamily::Sc58x => 8,
            ChipFamily::Sc57x => 4,
        }
    }

    pub const fn half_count(self) -> usize {
        self.sport_count() * 2
    }

    pub const fn contains(self, id: SportId) -> bool {
        (id.sport() as usize) < self.sport_count()
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChipFamily::Sc58x => "sc58x",
            ChipFamily::Sc57x => "sc57x",
        }
    }
}

impl fmt::Display for ChipFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChipFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChipFamily::ALL.into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::UnknownFamily)
    }
}

/// Family selected at build time.
#[cfg(not(feature = "sc57x"))]
pub const TARGET_FAMILY: ChipFamily = ChipFamily::Sc58x;

#[cfg(feature = "sc57x")]
pub const TARGET_FAMILY: ChipFamily = ChipFamily::Sc57x;

/// Per-half SPORT registers written by a static configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    Ctl,
    Div,
    Mctl,
    Cs0,
    Cs1,
    Cs2,
    Cs3,
}

impl Register {
    pub const CS: [Register; 4] = [Register::Cs0, Register::Cs1, Register::Cs2, Register::Cs3];

    pub const fn offset(self) -> RegisterAddress {
        match self {
            Register::Ctl  => 0x00,
            Register::Div  => 0x04,
            Register::Mctl => 0x08,
            Register::Cs0  => 0x0c,
            Register::Cs1  => 0x10,
            Register::Cs2  => 0x14,
            Register::Cs3  => 0x18,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Register::Ctl  => "CTL",
            Register::Div  => "DIV",
            Register::Mctl => "MCTL",
            Register::Cs0  => "CS0",
            Register::Cs1  => "CS1",
            Register::Cs2  => "CS2",
            Register::Cs3  => "CS3",
        }
    }
}

pub(crate) struct Addressing;

impl Addressing {
    const SPORT0_BASE: RegisterAddress = 0x3100_2000;
    const SPORT_STRIDE: RegisterAddress = 0x100;
    const HALF_B_OFFSET: RegisterAddress = 0x80;

    pub(crate) const fn sport(sport: usize) -> RegisterAddress {
        assert!(sport < SportId::COUNT, "sport < SportId::COUNT");
        Self::SPORT0_BASE + sport as RegisterAddress * Self::SPORT_STRIDE
    }

    pub(crate) const fn half(sport: usize, half: Half) -> RegisterAddress {
        let offset = match half {
            Half::A => 0,
            Half::B => Self::HALF_B_OFFSET,
        };
        Self::sport(sport) + offset
    }
}
