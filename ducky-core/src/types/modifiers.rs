use super::opcodes::{MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WINDOWS};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of held modifiers for a key press, stored as the device bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierSet(u8);

impl ModifierSet {
    pub const NONE: ModifierSet = ModifierSet(0);
    pub const CONTROL: ModifierSet = ModifierSet(MOD_CONTROL);
    pub const SHIFT: ModifierSet = ModifierSet(MOD_SHIFT);
    pub const ALT: ModifierSet = ModifierSet(MOD_ALT);
    pub const WINDOWS: ModifierSet = ModifierSet(MOD_WINDOWS);

    const ALL: u8 = MOD_CONTROL | MOD_SHIFT | MOD_ALT | MOD_WINDOWS;

    /// Build a set from a raw bitmask, dropping bits outside the four modifiers
    pub fn from_bits_truncate(bits: u8) -> Self {
        ModifierSet(bits & Self::ALL)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: ModifierSet) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ModifierSet {
    type Output = ModifierSet;

    fn bitor(self, rhs: ModifierSet) -> ModifierSet {
        ModifierSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModifierSet {
    fn bitor_assign(&mut self, rhs: ModifierSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (ModifierSet::CONTROL, "CONTROL"),
            (ModifierSet::SHIFT, "SHIFT"),
            (ModifierSet::ALT, "ALT"),
            (ModifierSet::WINDOWS, "WINDOWS"),
        ];

        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("-")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let set = ModifierSet::CONTROL | ModifierSet::ALT | ModifierSet::CONTROL;
        assert_eq!(set.bits(), 0x05);
    }

    #[test]
    fn test_truncate_foreign_bits() {
        let set = ModifierSet::from_bits_truncate(0xFA);
        assert_eq!(set, ModifierSet::SHIFT | ModifierSet::WINDOWS);
    }

    #[test]
    fn test_display_order() {
        let set = ModifierSet::WINDOWS | ModifierSet::CONTROL;
        assert_eq!(set.to_string(), "CONTROL-WINDOWS");
        assert_eq!(ModifierSet::NONE.to_string(), "");
    }
}
