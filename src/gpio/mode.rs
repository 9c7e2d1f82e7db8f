use crate::Error;

/// Pin operation mode.
///
/// The numeric mode code doubles as the value written into the pin's 4-bit slot of
/// the port control register (GPIOPCTL) for the alternate functions. Which
/// peripheral each alternate function selects depends on the pin; see the signal
/// tables in the device datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Analog input (code 0).
    ///
    /// Digital function disabled, analog isolation removed (GPIOAMSEL set).
    Adc,
    /// Alternate function 1.
    Alt1,
    /// Alternate function 2.
    Alt2,
    /// Alternate function 3.
    Alt3,
    /// Alternate function 4.
    Alt4,
    /// Alternate function 5.
    Alt5,
    /// Alternate function 6.
    Alt6,
    /// Alternate function 7.
    Alt7,
    /// Alternate function 8.
    Alt8,
    /// Alternate function 9.
    Alt9,
    /// Digital input/output (code 10).
    ///
    /// The pin is driven or read through the data register.
    Dio,
}

impl PinMode {
    /// Highest valid mode code.
    pub const MAX_CODE: u8 = 10;

    /// Returns `true` for any of the alternate functions 1 to 9.
    #[must_use]
    pub fn is_alternate(self) -> bool {
        !matches!(self, PinMode::Adc | PinMode::Dio)
    }
}

impl TryFrom<u8> for PinMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        Ok(match code {
            0 => Self::Adc,
            1 => Self::Alt1,
            2 => Self::Alt2,
            3 => Self::Alt3,
            4 => Self::Alt4,
            5 => Self::Alt5,
            6 => Self::Alt6,
            7 => Self::Alt7,
            8 => Self::Alt8,
            9 => Self::Alt9,
            10 => Self::Dio,
            _ => return Err(Error::InvalidMode(code)),
        })
    }
}

impl From<PinMode> for u8 {
    fn from(value: PinMode) -> Self {
        match value {
            PinMode::Adc => 0,
            PinMode::Alt1 => 1,
            PinMode::Alt2 => 2,
            PinMode::Alt3 => 3,
            PinMode::Alt4 => 4,
            PinMode::Alt5 => 5,
            PinMode::Alt6 => 6,
            PinMode::Alt7 => 7,
            PinMode::Alt8 => 8,
            PinMode::Alt9 => 9,
            PinMode::Dio => 10,
        }
    }
}
