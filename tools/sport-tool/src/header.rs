use std::io::Write;

use sport_config::ChipFamily;

use crate::error::Result;

/// Writes the register images of `family` as a C header of `#define`s, for
/// firmware that is not built with this crate.
pub fn write_header<W: Write>(out: &mut W, family: ChipFamily) -> Result<()> {
    let guard = format!("SPORT_CONFIG_{}_H", family.name().to_uppercase());

    writeln!(out, "/* SPORT register images for {family}. Generated by sport-tool, do not edit. */")?;
    writeln!(out)?;
    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out)?;
    writeln!(out, "#define SPORT_INSTANCE_COUNT {}", family.half_count())?;

    for instance in family.instances() {
        let prefix = format!("SPORT_{}", instance.id);
        let image = &instance.image;
        let dma = &instance.config.dma;

        writeln!(out)?;
        writeln!(out, "#define {prefix}_ENABLE     {}", instance.config.enabled as u32)?;
        writeln!(out, "#define {prefix}_CTL        0x{:08X}u", image.ctl)?;
        writeln!(out, "#define {prefix}_CTL_EN     0x{:08X}u", image.ctl_enabled())?;
        writeln!(out, "#define {prefix}_DIV        0x{:08X}u", image.div)?;
        writeln!(out, "#define {prefix}_MCTL       0x{:08X}u", image.mctl)?;
        for (n, cs) in image.cs.iter().enumerate() {
            writeln!(out, "#define {prefix}_CS{n}        0x{cs:08X}u")?;
        }
        writeln!(out, "#define {prefix}_DMA_MSIZE  {}  /* {} bytes */", dma.memory as u32, dma.memory.bytes())?;
        writeln!(out, "#define {prefix}_DMA_PSIZE  {}  /* {} bytes */", dma.peripheral as u32, dma.peripheral.bytes())?;
    }

    writeln!(out)?;
    writeln!(out, "#endif /* {guard} */")?;

    Ok(())
}
