use tm4c_port::gpio::{InternalResistor, LogicLevel, PinDirection, PinMode, PinNumber, PortId};
use tm4c_port::{ConfigurationSet, PinDescriptor};

/// Pin table for an EK-TM4C123GXL LaunchPad: the RGB LED, both user switches,
/// UART0 to the debug USB port, I2C0, and one analog input.
const LAUNCHPAD: [PinDescriptor; 10] = [
    // UART0 RX/TX
    PinDescriptor::new(PortId::A, PinNumber::P0).with_mode(PinMode::Alt1),
    PinDescriptor::new(PortId::A, PinNumber::P1)
        .output(LogicLevel::High)
        .with_mode(PinMode::Alt1),
    // I2C0 SCL/SDA
    PinDescriptor::new(PortId::B, PinNumber::P2).with_mode(PinMode::Alt3),
    PinDescriptor::new(PortId::B, PinNumber::P3).with_mode(PinMode::Alt3),
    // AIN0, can be switched to digital at runtime
    PinDescriptor::new(PortId::E, PinNumber::P3)
        .with_mode(PinMode::Adc)
        .with_changeable_mode(),
    // SW2, behind the lock
    PinDescriptor::new(PortId::F, PinNumber::P0).input(InternalResistor::PullUp),
    // Red, blue and green LED
    PinDescriptor::new(PortId::F, PinNumber::P1).output(LogicLevel::Low),
    PinDescriptor::new(PortId::F, PinNumber::P2)
        .output(LogicLevel::Low)
        .with_changeable_direction(),
    PinDescriptor::new(PortId::F, PinNumber::P3).output(LogicLevel::High),
    // SW1
    PinDescriptor::new(PortId::F, PinNumber::P4)
        .input(InternalResistor::PullUp)
        .with_changeable_direction()
        .with_changeable_mode(),
];

pub(crate) fn launchpad() -> Result<ConfigurationSet, tm4c_port::Error> {
    ConfigurationSet::new(LAUNCHPAD)
}

/// Ports used by `config`, in port order.
pub(crate) fn used_ports(config: &ConfigurationSet) -> Vec<PortId> {
    PortId::ALL
        .into_iter()
        .filter(|port| config.iter().any(|descriptor| descriptor.port == *port))
        .collect()
}

pub(crate) fn print_table(config: &ConfigurationSet) {
    println!("idx  pin   mode  direction  level/pull  dir-chg  mode-chg");
    for (idx, d) in config.iter().enumerate() {
        let setting = match d.direction {
            PinDirection::Output => format!("{:?}", d.initial_level),
            PinDirection::Input => format!("{:?}", d.resistor),
        };
        println!(
            "{idx:>3}  P{}{}  {:>4}  {:<9}  {:<10}  {:<7}  {}",
            d.port,
            d.pin,
            u8::from(d.initial_mode),
            format!("{:?}", d.direction),
            setting,
            d.direction_changeable,
            d.mode_changeable,
        );
    }
}
