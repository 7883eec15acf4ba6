use std::io::{self, Write};

use sport_config::{program_family, ChipFamily, RegisterWrite};
use sport_config::instance::{RegisterAddress, RegisterValue};
use tracing::debug;

use crate::error::Result;

/// Renders register writes as `mww` memory-write commands, the form debugger
/// scripts accept.
pub struct ScriptWriter<W: Write> {
    out: W,
    count: usize,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<W: Write> RegisterWrite for ScriptWriter<W> {
    type Error = io::Error;

    fn register_write(&mut self, address: RegisterAddress, value: RegisterValue) -> io::Result<()> {
        writeln!(self.out, "mww 0x{address:08x} 0x{value:08x}")?;
        self.count += 1;
        Ok(())
    }
}

pub fn write_sequence<W: Write>(out: W, family: ChipFamily) -> Result<usize> {
    let mut writer = ScriptWriter::new(out);
    program_family(&mut writer, family)?;
    debug!(family = %family, writes = writer.count(), "initialization sequence");
    Ok(writer.count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_script() {
        let mut out = Vec::new();
        let count = write_sequence(&mut out, ChipFamily::Sc58x).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(count, 6 * 8);
        assert_eq!(lines.len(), count);
        assert_eq!(lines[0], "mww 0x31002000 0x0200fdf0");
        assert_eq!(lines[1], "mww 0x31002004 0x003f0003");
        assert_eq!(lines[7], "mww 0x31002000 0x0200fdf1");
        assert_eq!(lines[8], "mww 0x31002080 0x000039f0");
    }
}
