#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// GPIO pin level setting.
pub enum LogicLevel {
    /// Logical 1.
    High,
    /// Logical 0.
    Low,
}

impl LogicLevel {
    /// Returns `true` if the level is [`LogicLevel::High`].
    #[must_use]
    pub fn is_high(self) -> bool {
        matches!(self, LogicLevel::High)
    }
}

impl From<bool> for LogicLevel {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

impl From<LogicLevel> for bool {
    fn from(value: LogicLevel) -> Self {
        match value {
            LogicLevel::High => true,
            LogicLevel::Low => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// GPIO pin direction.
pub enum PinDirection {
    /// The pin is an input.
    Input,
    /// The pin is an output.
    Output,
}

impl PinDirection {
    /// Returns `true` if the direction is [`PinDirection::Output`].
    #[must_use]
    pub fn is_output(self) -> bool {
        matches!(self, PinDirection::Output)
    }
}

impl From<bool> for PinDirection {
    /// Convert a direction register bit (1 = output) into a direction.
    fn from(value: bool) -> Self {
        if value { Self::Output } else { Self::Input }
    }
}

impl From<PinDirection> for bool {
    /// Convert a direction into its direction register bit (1 = output).
    fn from(value: PinDirection) -> Self {
        match value {
            PinDirection::Input => false,
            PinDirection::Output => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Internal resistor attached to an input pin.
///
/// Only applied when the pin is configured as an input.
pub enum InternalResistor {
    /// Neither pull-up nor pull-down.
    Off,
    /// Weak pull-up (GPIOPUR).
    PullUp,
    /// Weak pull-down (GPIOPDR).
    PullDown,
}
