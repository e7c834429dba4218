use std::fmt;
use std::fmt::Display;

pub const BANCO_DO_BRASIL: u16 = 1;
pub const CEF: u16 = 104;
pub const BRADESCO: u16 = 237;
pub const ITAU: u16 = 341;

/// Issuing bank of a return file. Selects which code tables are authoritative
/// for every record of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    BancoDoBrasil,
    Cef,
    Bradesco,
    Itau,
    Other(u16),
}

impl Bank {
    pub fn from_code(code: u16) -> Self {
        match code {
            BANCO_DO_BRASIL => Bank::BancoDoBrasil,
            CEF => Bank::Cef,
            BRADESCO => Bank::Bradesco,
            ITAU => Bank::Itau,
            other => Bank::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Bank::BancoDoBrasil => BANCO_DO_BRASIL,
            Bank::Cef => CEF,
            Bank::Bradesco => BRADESCO,
            Bank::Itau => ITAU,
            Bank::Other(code) => *code,
        }
    }
}

impl From<u16> for Bank {
    fn from(code: u16) -> Self {
        Bank::from_code(code)
    }
}

impl Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_banks() {
        assert_eq!(Bank::from_code(1), Bank::BancoDoBrasil);
        assert_eq!(Bank::from_code(104), Bank::Cef);
        assert_eq!(Bank::from_code(237), Bank::Bradesco);
        assert_eq!(Bank::from_code(341), Bank::Itau);
    }

    #[test]
    fn test_from_code_other_keeps_number() {
        let bank = Bank::from_code(33);
        assert_eq!(bank, Bank::Other(33));
        assert_eq!(bank.code(), 33);
        assert_eq!(format!("{}", bank), "033");
    }

    #[test]
    fn test_code_roundtrips_for_named_banks() {
        for code in [BANCO_DO_BRASIL, CEF, BRADESCO, ITAU] {
            assert_eq!(Bank::from(code).code(), code);
        }
    }
}
