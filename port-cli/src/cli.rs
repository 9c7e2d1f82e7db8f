use clap::{Parser, ValueEnum};
use tm4c_port::gpio::PinDirection;

use crate::util;

/// Try out the TM4C123 port driver
///
/// Each command initializes the driver with the EK-TM4C123GXL LaunchPad pin
/// table against a simulated register file, runs the requested operation, and
/// prints the resulting state of every port the table uses.
///
/// Pins are addressed by their index in the table (see the table command).
/// Precondition failures are logged as warnings; set RUST_LOG=debug to also see
/// each pin being configured.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Print the pin configuration table.
    Table,
    /// Initialize the ports and print their registers.
    Init,
    /// Change the direction of one pin.
    SetDirection {
        /// Index of the pin in the table
        pin: usize,
        direction: Direction,
    },
    /// Change the mode of one pin.
    SetMode {
        /// Index of the pin in the table
        pin: usize,
        /// adc, alt1 to alt9, dio, or a mode code from 0 to 10
        #[arg(value_parser = util::mode_code)]
        mode: u8,
    },
    /// Restore the configured direction of pins whose direction is fixed.
    Refresh {
        /// Invert every direction bit before refreshing
        #[arg(long)]
        scramble: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Direction {
    #[value(alias = "in")]
    Input,
    #[value(alias = "out")]
    Output,
}

impl From<Direction> for PinDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Input => PinDirection::Input,
            Direction::Output => PinDirection::Output,
        }
    }
}
