use clap::{Parser, Subcommand, Args, ArgEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sport_config::{instance, ChipFamily, SportId, TARGET_FAMILY};
use sport_config::divisor::{clock_divisor, frame_sync_divisor, serial_clock_hz};
use sport_config::register::{DmaCfg, SportCtl, SportDiv, SportMctl};

use crate::error::{parse_u32, Error, Result};

mod dump;
mod error;
mod header;
mod sequence;

#[derive(Parser)]
#[clap(author, version, about, long_about=None)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(ArgEnum, Clone, Copy)]
pub(crate) enum Family {
    Sc58x,
    Sc57x,
}

impl From<Family> for ChipFamily {
    fn from(f: Family) -> Self {
        match f {
            Family::Sc58x => ChipFamily::Sc58x,
            Family::Sc57x => ChipFamily::Sc57x,
        }
    }
}

fn family_or_target(family: Option<Family>) -> ChipFamily {
    family.map(ChipFamily::from).unwrap_or(TARGET_FAMILY)
}

#[derive(ArgEnum, Clone, Copy)]
pub(crate) enum DecodeRegister {
    Ctl,
    Div,
    Mctl,
    Dma,
}

#[derive(Args)]
pub(crate) struct DumpArgs {
    /// Chip family, defaults to the build-time target.
    #[clap(long, arg_enum)]
    family: Option<Family>,

    /// SCLK in Hz, to show the resulting serial clock and frame rates.
    #[clap(long)]
    sclk: Option<u32>,

    /// Half-SPORT to dump, e.g. 0A. All halves when omitted.
    instance: Option<String>,
}

#[derive(Args)]
pub(crate) struct DecodeArgs {
    #[clap(arg_enum)]
    register: DecodeRegister,

    value: String,
}

#[derive(Args)]
pub(crate) struct FamilyArgs {
    #[clap(long, arg_enum)]
    family: Option<Family>,
}

#[derive(Args)]
pub(crate) struct DivisorArgs {
    #[clap(long)]
    sclk: u32,

    #[clap(long)]
    bit_clock: u32,

    /// Serial clocks per frame.
    #[clap(long)]
    frame_clocks: Option<u32>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    #[clap(name="dump")]
    Dump(DumpArgs),

    #[clap(name="decode")]
    Decode(DecodeArgs),

    #[clap(name="header")]
    Header(FamilyArgs),

    #[clap(name="divisor")]
    Divisor(DivisorArgs),

    #[clap(name="sequence")]
    Sequence(FamilyArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(args: Cli) -> Result<()> {
    match args.command {
        Commands::Dump(a) => {
            let family = family_or_target(a.family);
            match a.instance {
                Some(name) => {
                    let id: SportId = name.parse()?;
                    let instance = instance(id, family)
                        .ok_or(Error::NotInFamily { instance: id, family })?;
                    dump::dump_instance(instance, a.sclk);
                },
                None => {
                    dump::dump_family(family, a.sclk);
                },
            }
        },
        Commands::Decode(a) => {
            let value = parse_u32(&a.value)?;
            debug!(value, "decode");
            match a.register {
                DecodeRegister::Ctl  => println!("{:?}", SportCtl::from(value)),
                DecodeRegister::Div  => println!("{:?}", SportDiv::from(value)),
                DecodeRegister::Mctl => println!("{:?}", SportMctl::from(value)),
                DecodeRegister::Dma  => println!("{:?}", DmaCfg::from(value)),
            }
        },
        Commands::Header(a) => {
            let family = family_or_target(a.family);
            let stdout = std::io::stdout();
            header::write_header(&mut stdout.lock(), family)?;
            info!(%family, "header written");
        },
        Commands::Divisor(a) => {
            let clkdiv = clock_divisor(a.sclk, a.bit_clock)
                .ok_or(Error::ClockUnreachable { sclk_hz: a.sclk, bit_clock_hz: a.bit_clock })?;
            println!("CLKDIV\t{clkdiv}\t({} Hz)", serial_clock_hz(a.sclk, clkdiv));

            if let Some(clocks) = a.frame_clocks {
                let fsdiv = frame_sync_divisor(clocks)
                    .ok_or(Error::FrameUnreachable { clocks })?;
                println!("FSDIV\t{fsdiv}\t({} Hz)", serial_clock_hz(a.sclk, clkdiv) / clocks);
            }
        },
        Commands::Sequence(a) => {
            let family = family_or_target(a.family);
            let stdout = std::io::stdout();
            let count = sequence::write_sequence(stdout.lock(), family)?;
            info!(%family, count, "sequence written");
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<()> {
        run(Cli::parse_from(std::iter::once("sport-tool").chain(args.iter().copied())))
    }

    #[test]
    fn dump_rejects_instance_outside_family() {
        let result = run_args(&["dump", "--family", "sc57x", "4A"]);
        assert!(matches!(result, Err(Error::NotInFamily { family: ChipFamily::Sc57x, .. })));
    }

    #[test]
    fn dump_rejects_bad_instance_name() {
        let result = run_args(&["dump", "9Z"]);
        assert!(matches!(result, Err(Error::Config(sport_config::Error::InvalidInstance))));
    }

    #[test]
    fn decode_rejects_bad_value() {
        let result = run_args(&["decode", "ctl", "0xnope"]);
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }

    #[test]
    fn divisor_reports_unreachable_clock() {
        let result = run_args(&["divisor", "--sclk", "1000", "--bit-clock", "2000"]);
        assert!(matches!(result, Err(Error::ClockUnreachable { sclk_hz: 1000, bit_clock_hz: 2000 })));
    }
}
