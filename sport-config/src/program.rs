//! Writes the static images into the SPORT registers.

use crate::instance::{ChipFamily, Register, RegisterAddress, RegisterValue};
use crate::table::SportInstance;

/// Anything that can store a 32-bit value at a peripheral register address:
/// volatile MMIO on target, a debugger link or a recorder on the host.
pub trait RegisterWrite {
    type Error;

    fn register_write(&mut self, address: RegisterAddress, value: RegisterValue) -> Result<(), Self::Error>;
}

/// One register write of the initialization sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InitWrite {
    pub register: Register,
    pub address: RegisterAddress,
    pub value: RegisterValue,
}

/// Initialization writes for one half-SPORT.
///
/// CTL goes first with the enables clear so the half is stopped while its
/// divisors and channel selects change, and last with the enables set.
pub fn sequence(instance: &SportInstance) -> [InitWrite; 8] {
    let id = instance.id;
    let image = &instance.image;
    let write = |register: Register, value: RegisterValue| InitWrite {
        register,
        address: id.register_address(register),
        value,
    };

    [
        write(Register::Ctl,  image.ctl),
        write(Register::Div,  image.div),
        write(Register::Mctl, image.mctl),
        write(Register::Cs0,  image.cs[0]),
        write(Register::Cs1,  image.cs[1]),
        write(Register::Cs2,  image.cs[2]),
        write(Register::Cs3,  image.cs[3]),
        write(Register::Ctl,  image.ctl_enabled()),
    ]
}

/// Programs and enables one half-SPORT. Inactive instances are left alone.
pub fn program<W>(writer: &mut W, instance: &SportInstance) -> Result<(), W::Error>
where W: RegisterWrite,
{
    if !instance.config.enabled {
        return Ok(());
    }

    for w in sequence(instance) {
        writer.register_write(w.address, w.value)?;
    }

    Ok(())
}

/// Programs every active half-SPORT of `family`, in table order.
pub fn program_family<W>(writer: &mut W, family: ChipFamily) -> Result<(), W::Error>
where W: RegisterWrite,
{
    for instance in family.enabled() {
        program(writer, instance)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::instance::{Half, SportId};
    use crate::table::{instance, SPORT_1A_IMAGE};

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(RegisterAddress, RegisterValue)>,
        fail_at: Option<usize>,
    }

    #[derive(Debug, PartialEq)]
    struct Refused(RegisterAddress);

    impl RegisterWrite for Recorder {
        type Error = Refused;

        fn register_write(&mut self, address: RegisterAddress, value: RegisterValue) -> Result<(), Self::Error> {
            if self.fail_at == Some(self.writes.len()) {
                return Err(Refused(address));
            }
            self.writes.push((address, value));
            Ok(())
        }
    }

    fn sport_1a() -> &'static SportInstance {
        instance(SportId::new(1, Half::A), ChipFamily::Sc58x).unwrap()
    }

    #[test]
    fn sequence_order() {
        let writes = sequence(sport_1a());
        let registers: Vec<_> = writes.iter().map(|w| w.register).collect();
        assert_eq!(registers, [
            Register::Ctl, Register::Div, Register::Mctl,
            Register::Cs0, Register::Cs1, Register::Cs2, Register::Cs3,
            Register::Ctl,
        ]);

        assert_eq!(writes[0], InitWrite { register: Register::Ctl, address: 0x3100_2100, value: 0x0200_f5f0 });
        assert_eq!(writes[3].address, 0x3100_210c);
        assert_eq!(writes[3].value, SPORT_1A_IMAGE.cs[0]);
        assert_eq!(writes[7].value, 0x0200_f5f1);
    }

    #[test]
    fn program_writes_sequence() {
        let mut recorder = Recorder::default();
        program(&mut recorder, sport_1a()).unwrap();

        let expected: Vec<_> = sequence(sport_1a()).iter().map(|w| (w.address, w.value)).collect();
        assert_eq!(recorder.writes, expected);
    }

    #[test]
    fn program_skips_inactive() {
        let mut recorder = Recorder::default();
        let unused = instance(SportId::new(6, Half::B), ChipFamily::Sc58x).unwrap();
        program(&mut recorder, unused).unwrap();
        assert!(recorder.writes.is_empty());
    }

    #[test]
    fn program_family_covers_enabled_halves() {
        let mut recorder = Recorder::default();
        program_family(&mut recorder, ChipFamily::Sc57x).unwrap();

        // 0A, 0B, 1A, 1B, 2A, 2B
        assert_eq!(recorder.writes.len(), 6 * 8);
        assert_eq!(recorder.writes[0].0, 0x3100_2000);
        assert_eq!(recorder.writes.last().unwrap().0, 0x3100_2280);
    }

    #[test]
    fn program_propagates_writer_error() {
        let mut recorder = Recorder { fail_at: Some(2), ..Recorder::default() };
        let result = program(&mut recorder, sport_1a());

        assert_eq!(result, Err(Refused(0x3100_2108)));
        assert_eq!(recorder.writes.len(), 2);
    }
}
