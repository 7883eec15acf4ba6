use sport_config::{ChipFamily, SportId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(sport_config::Error),

    #[error("SPORT {instance} is not implemented on {family}")]
    NotInFamily { instance: SportId, family: ChipFamily },

    #[error("invalid register value {0:?}, expected decimal or 0x-prefixed hex")]
    InvalidValue(String),

    #[error("no CLKDIV gives {bit_clock_hz} Hz from {sclk_hz} Hz")]
    ClockUnreachable { sclk_hz: u32, bit_clock_hz: u32 },

    #[error("no FSDIV gives a {clocks} clock frame")]
    FrameUnreachable { clocks: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<sport_config::Error> for Error {
    fn from(e: sport_config::Error) -> Self {
        Error::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Accepts `0x`-prefixed hex, `0b`-prefixed binary, or decimal.
pub fn parse_u32(s: &str) -> Result<u32> {
    let t = s.trim().replace('_', "");
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = t.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        t.parse()
    };

    parsed.map_err(|_| Error::InvalidValue(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u32_radixes() {
        assert_eq!(parse_u32("0x0200_fdf0").unwrap(), 0x0200_fdf0);
        assert_eq!(parse_u32("0XFF").unwrap(), 0xff);
        assert_eq!(parse_u32("0b101").unwrap(), 5);
        assert_eq!(parse_u32(" 4096 ").unwrap(), 4096);
    }

    #[test]
    fn parse_u32_rejects_garbage() {
        assert!(matches!(parse_u32("0xzz"), Err(Error::InvalidValue(s)) if s == "0xzz"));
        assert!(matches!(parse_u32("0x1_0000_0000"), Err(Error::InvalidValue(_))));
        assert!(matches!(parse_u32(""), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn messages() {
        let e = Error::NotInFamily {
            instance: "5A".parse().unwrap(),
            family: ChipFamily::Sc57x,
        };
        assert_eq!(e.to_string(), "SPORT 5A is not implemented on sc57x");
        assert_eq!(Error::from(sport_config::Error::UnknownFamily).to_string(), "unknown chip family");
    }
}
