//! Driver behaviour against the simulated register file.
#![cfg(all(
    feature = "dev-error-detect",
    feature = "set-pin-direction-api",
    feature = "set-pin-mode-api"
))]

use std::cell::RefCell;

use tm4c_port::fault::{ApiId, FaultCode, FaultReporter};
use tm4c_port::gpio::{InternalResistor, LogicLevel, PinDirection, PinMode, PinNumber, PortId};
use tm4c_port::registers::{AccessKind, AccessTarget, Register, SimulatedRegisters};
use tm4c_port::{ConfigurationSet, Error, PinDescriptor, Port, PortStatus};

const LOCK_KEY: u32 = 0x4C4F_434B;

#[derive(Debug, Default)]
struct Recorder {
    faults: RefCell<Vec<(u16, u8, ApiId, FaultCode)>>,
}

impl Recorder {
    fn codes(&self) -> Vec<(ApiId, FaultCode)> {
        self.faults
            .borrow()
            .iter()
            .map(|&(_, _, api, code)| (api, code))
            .collect()
    }
}

impl FaultReporter for Recorder {
    fn report_fault(&self, module_id: u16, instance_id: u8, api_id: ApiId, code: FaultCode) {
        self.faults
            .borrow_mut()
            .push((module_id, instance_id, api_id, code));
    }
}

fn writes(sim: &SimulatedRegisters) -> Vec<(AccessTarget, u32)> {
    sim.accesses()
        .into_iter()
        .filter(|a| a.kind == AccessKind::Write)
        .map(|a| (a.target, a.value))
        .collect()
}

/// PF1 output, PF0 pull-up input (changeable direction), PB1 alt 1 (changeable
/// mode), PE3 analog, PC1 debug pin with everything changeable.
fn board() -> ConfigurationSet {
    ConfigurationSet::new([
        PinDescriptor::new(PortId::F, PinNumber::P1).output(LogicLevel::High),
        PinDescriptor::new(PortId::F, PinNumber::P0)
            .input(InternalResistor::PullUp)
            .with_changeable_direction(),
        PinDescriptor::new(PortId::B, PinNumber::P1)
            .with_mode(PinMode::Alt1)
            .with_changeable_mode(),
        PinDescriptor::new(PortId::E, PinNumber::P3).with_mode(PinMode::Adc),
        PinDescriptor::new(PortId::C, PinNumber::P1)
            .output(LogicLevel::Low)
            .with_changeable_direction()
            .with_changeable_mode(),
    ])
    .unwrap()
}

#[test]
fn init_programs_output_pin() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    assert_eq!(port.status(), PortStatus::NotInitialized);

    port.init(Some(&config)).unwrap();
    assert_eq!(port.status(), PortStatus::Initialized);
    assert!(port.configuration().is_some());

    let pf1 = PinNumber::P1;
    assert!(sim.clock_gate() & (1 << 5) != 0);
    assert!(sim.bit(PortId::F, Register::Direction, pf1));
    assert!(sim.bit(PortId::F, Register::Data, pf1));
    assert!(sim.bit(PortId::F, Register::DigitalEnable, pf1));
    assert!(!sim.bit(PortId::F, Register::AltFunctionSelect, pf1));
    assert!(!sim.bit(PortId::F, Register::AnalogModeSelect, pf1));
    assert_eq!(sim.mux_slot(PortId::F, pf1), 0);
}

#[test]
fn init_enables_each_used_port_clock() {
    let sim = SimulatedRegisters::new();
    let config = board();
    Port::new(&sim).init(Some(&config)).unwrap();
    // B, C, E, F
    assert_eq!(sim.clock_gate(), 0b11_0110);
}

#[test]
fn init_unlocks_pf0_before_configuring_it() {
    let sim = SimulatedRegisters::new();
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::F, PinNumber::P0).input(InternalResistor::PullUp)
    ])
    .unwrap();
    Port::new(&sim).init(Some(&config)).unwrap();

    let accesses = sim.accesses();
    let first_port_access = accesses
        .iter()
        .position(|a| a.target != AccessTarget::ClockGate)
        .unwrap();
    assert_eq!(
        accesses[..first_port_access]
            .iter()
            .map(|a| a.kind)
            .collect::<Vec<_>>(),
        [AccessKind::Read, AccessKind::Write, AccessKind::Read]
    );

    let port_writes: Vec<_> = writes(&sim)
        .into_iter()
        .filter(|(target, _)| *target != AccessTarget::ClockGate)
        .collect();
    assert_eq!(
        port_writes[0],
        (AccessTarget::Port(PortId::F, Register::Lock), LOCK_KEY)
    );
    assert_eq!(
        port_writes[1].0,
        AccessTarget::Port(PortId::F, Register::Commit)
    );

    // The protected bits only stick because the pin was committed.
    assert!(sim.bit(PortId::F, Register::PullUp, PinNumber::P0));
    assert!(!sim.bit(PortId::F, Register::PullDown, PinNumber::P0));
    assert!(sim.bit(PortId::F, Register::DigitalEnable, PinNumber::P0));
}

#[test]
fn init_unlocks_pd7() {
    let sim = SimulatedRegisters::new();
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::D, PinNumber::P7).input(InternalResistor::PullDown)
    ])
    .unwrap();
    Port::new(&sim).init(Some(&config)).unwrap();

    assert!(sim.is_unlocked(PortId::D));
    assert!(sim.bit(PortId::D, Register::Commit, PinNumber::P7));
    assert!(sim.bit(PortId::D, Register::PullDown, PinNumber::P7));
    assert!(!sim.bit(PortId::D, Register::PullUp, PinNumber::P7));
}

#[test]
fn init_never_unlocks_debug_pins() {
    let sim = SimulatedRegisters::new();
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::C, PinNumber::P0).output(LogicLevel::High)
    ])
    .unwrap();
    Port::new(&sim).init(Some(&config)).unwrap();

    assert!(
        writes(&sim)
            .iter()
            .all(|(target, _)| *target != AccessTarget::Port(PortId::C, Register::Lock))
    );
    assert!(!sim.is_unlocked(PortId::C));
    assert!(sim.bit(PortId::C, Register::Direction, PinNumber::P0));
    // Still committed to the debug function.
    assert!(sim.bit(PortId::C, Register::AltFunctionSelect, PinNumber::P0));
}

#[test]
fn init_plain_pins_do_not_touch_lock() {
    let sim = SimulatedRegisters::new();
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::F, PinNumber::P1).output(LogicLevel::Low)
    ])
    .unwrap();
    Port::new(&sim).init(Some(&config)).unwrap();
    assert!(writes(&sim).iter().all(|(target, _)| {
        !matches!(
            target,
            AccessTarget::Port(_, Register::Lock | Register::Commit)
        )
    }));
}

#[test]
fn alternate_mode_writes_code_into_mux_slot() {
    let sim = SimulatedRegisters::new();
    sim.poke(PortId::B, Register::PortControl, 0xFFFF_FFFF);
    sim.poke(PortId::B, Register::AnalogModeSelect, 0xFF);
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::B, PinNumber::P1).with_mode(PinMode::Alt7)
    ])
    .unwrap();
    Port::new(&sim).init(Some(&config)).unwrap();

    assert_eq!(sim.word(PortId::B, Register::PortControl), 0xFFFF_FF7F);
    assert!(sim.bit(PortId::B, Register::AltFunctionSelect, PinNumber::P1));
    assert!(sim.bit(PortId::B, Register::DigitalEnable, PinNumber::P1));
    assert_eq!(sim.word(PortId::B, Register::AnalogModeSelect), 0xFD);

    let pctl_writes: Vec<u32> = writes(&sim)
        .into_iter()
        .filter(|(target, _)| *target == AccessTarget::Port(PortId::B, Register::PortControl))
        .map(|(_, value)| value)
        .collect();
    assert_eq!(pctl_writes, [0xFFFF_FF0F, 0xFFFF_FF7F]);
}

#[test]
fn analog_mode_disables_digital_function() {
    let sim = SimulatedRegisters::new();
    sim.poke(PortId::E, Register::DigitalEnable, 0xFF);
    let config = board();
    Port::new(&sim).init(Some(&config)).unwrap();

    assert!(!sim.bit(PortId::E, Register::DigitalEnable, PinNumber::P3));
    assert!(!sim.bit(PortId::E, Register::AltFunctionSelect, PinNumber::P3));
    assert!(sim.bit(PortId::E, Register::AnalogModeSelect, PinNumber::P3));
    assert_eq!(sim.word(PortId::E, Register::DigitalEnable), 0xF7);
}

#[test]
fn init_without_config_is_rejected() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let mut port = Port::with_reporter(&sim, &recorder);

    assert_eq!(port.init(None), Err(Error::ConfigInvalid));
    assert_eq!(port.status(), PortStatus::NotInitialized);
    assert!(sim.accesses().is_empty());
    assert_eq!(
        *recorder.faults.borrow(),
        [(124, 0, ApiId::Init, FaultCode::ParamConfig)]
    );
}

#[test]
fn init_without_config_keeps_previous_config() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();
    assert_eq!(port.init(None), Err(Error::ConfigInvalid));
    assert_eq!(port.status(), PortStatus::Initialized);
}

#[test]
fn init_is_idempotent() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();
    let first = PortId::ALL.map(|p| sim.snapshot(p));
    port.init(Some(&config)).unwrap();
    assert_eq!(PortId::ALL.map(|p| sim.snapshot(p)), first);
    assert!(port.is_initialized());
}

#[test]
fn operations_before_init_report_uninit() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let port = Port::with_reporter(&sim, &recorder);

    assert_eq!(
        port.set_pin_direction(0, PinDirection::Output),
        Err(Error::Uninitialized)
    );
    assert_eq!(port.set_pin_mode(0, 10), Err(Error::Uninitialized));
    assert_eq!(port.refresh_port_direction(), Err(Error::Uninitialized));

    assert!(sim.accesses().is_empty());
    assert_eq!(
        recorder.codes(),
        [
            (ApiId::SetPinDirection, FaultCode::Uninit),
            (ApiId::SetPinMode, FaultCode::Uninit),
            (ApiId::RefreshPortDirection, FaultCode::Uninit),
        ]
    );
}

#[test]
fn set_pin_mode_before_init_checks_everything() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let port = Port::with_reporter(&sim, &recorder);

    assert_eq!(port.set_pin_mode(50, 11), Err(Error::Uninitialized));
    assert_eq!(
        recorder.codes(),
        [
            (ApiId::SetPinMode, FaultCode::Uninit),
            (ApiId::SetPinMode, FaultCode::ParamPin),
            (ApiId::SetPinMode, FaultCode::ParamInvalidMode),
        ]
    );
}

#[test]
fn set_pin_direction_changes_only_the_direction_bit() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();
    sim.poke(PortId::F, Register::Direction, 0b1000_0010);
    let before = sim.snapshot(PortId::F);

    port.set_pin_direction(1, PinDirection::Output).unwrap();
    let after = sim.snapshot(PortId::F);
    assert_eq!(after.direction, 0b1000_0011);
    assert_eq!(
        after,
        tm4c_port::registers::PortSnapshot {
            direction: 0b1000_0011,
            ..before
        }
    );

    port.set_pin_direction(1, PinDirection::Input).unwrap();
    assert_eq!(sim.word(PortId::F, Register::Direction), 0b1000_0010);
}

#[test]
fn set_pin_direction_rejects_pin_outside_table() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let config = board();
    let mut port = Port::with_reporter(&sim, &recorder);
    port.init(Some(&config)).unwrap();
    sim.clear_accesses();

    assert_eq!(
        port.set_pin_direction(5, PinDirection::Output),
        Err(Error::InvalidPin { pin: 5, limit: 5 })
    );
    assert!(writes(&sim).is_empty());
    assert_eq!(
        recorder.codes(),
        [(ApiId::SetPinDirection, FaultCode::ParamPin)]
    );
}

#[test]
fn set_pin_direction_respects_fixed_direction() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let config = board();
    let mut port = Port::with_reporter(&sim, &recorder);
    port.init(Some(&config)).unwrap();
    sim.clear_accesses();

    assert_eq!(
        port.set_pin_direction(0, PinDirection::Input),
        Err(Error::DirectionUnchangeable { pin: 0 })
    );
    assert!(sim.bit(PortId::F, Register::Direction, PinNumber::P1));
    assert!(writes(&sim).is_empty());
    assert_eq!(
        *recorder.faults.borrow(),
        [(124, 0, ApiId::SetPinDirection, FaultCode::DirectionUnchangeable)]
    );
    assert_eq!(u8::from(FaultCode::DirectionUnchangeable), 0x0B);
}

#[test]
fn set_pin_mode_switches_between_modes() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();
    let pin = PinNumber::P1;
    let direction = sim.word(PortId::B, Register::Direction);

    port.set_pin_mode(2, u8::from(PinMode::Alt3)).unwrap();
    assert_eq!(sim.mux_slot(PortId::B, pin), 3);
    assert!(sim.bit(PortId::B, Register::AltFunctionSelect, pin));

    port.set_pin_mode(2, u8::from(PinMode::Adc)).unwrap();
    assert_eq!(sim.mux_slot(PortId::B, pin), 0);
    assert!(!sim.bit(PortId::B, Register::AltFunctionSelect, pin));
    assert!(!sim.bit(PortId::B, Register::DigitalEnable, pin));
    assert!(sim.bit(PortId::B, Register::AnalogModeSelect, pin));

    port.set_pin_mode(2, u8::from(PinMode::Dio)).unwrap();
    assert!(sim.bit(PortId::B, Register::DigitalEnable, pin));
    assert!(!sim.bit(PortId::B, Register::AnalogModeSelect, pin));

    assert_eq!(sim.word(PortId::B, Register::Direction), direction);
}

#[test]
fn set_pin_mode_rejects_bad_arguments() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let config = board();
    let mut port = Port::with_reporter(&sim, &recorder);
    port.init(Some(&config)).unwrap();
    sim.clear_accesses();

    assert_eq!(port.set_pin_mode(2, 11), Err(Error::InvalidMode(11)));
    assert_eq!(
        port.set_pin_mode(43, 1),
        Err(Error::InvalidPin { pin: 43, limit: 43 })
    );
    assert_eq!(
        port.set_pin_mode(7, 1),
        Err(Error::InvalidPin { pin: 7, limit: 5 })
    );
    assert_eq!(port.set_pin_mode(0, 1), Err(Error::ModeUnchangeable { pin: 0 }));
    assert_eq!(port.set_pin_mode(9, 12), Err(Error::InvalidPin { pin: 9, limit: 5 }));

    assert!(writes(&sim).is_empty());
    assert_eq!(
        recorder.codes(),
        [
            (ApiId::SetPinMode, FaultCode::ParamInvalidMode),
            (ApiId::SetPinMode, FaultCode::ParamPin),
            (ApiId::SetPinMode, FaultCode::ParamPin),
            (ApiId::SetPinMode, FaultCode::ModeUnchangeable),
            (ApiId::SetPinMode, FaultCode::ParamPin),
            (ApiId::SetPinMode, FaultCode::ParamInvalidMode),
        ]
    );
}

#[test]
fn runtime_operations_skip_debug_pins() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let config = board();
    let mut port = Port::with_reporter(&sim, &recorder);
    port.init(Some(&config)).unwrap();
    let before = sim.snapshot(PortId::C);
    sim.clear_accesses();

    for direction in [PinDirection::Input, PinDirection::Output] {
        port.set_pin_direction(4, direction).unwrap();
    }
    for code in 0..=PinMode::MAX_CODE {
        port.set_pin_mode(4, code).unwrap();
    }
    port.refresh_port_direction().unwrap();

    assert_eq!(sim.snapshot(PortId::C), before);
    assert!(
        sim.accesses()
            .iter()
            .all(|a| !matches!(a.target, AccessTarget::Port(PortId::C, _)))
    );
    assert!(port.reporter().faults.borrow().is_empty());
}

#[test]
fn fixed_debug_pins_are_refused_without_writes() {
    let sim = SimulatedRegisters::new();
    let recorder = Recorder::default();
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::C, PinNumber::P2).output(LogicLevel::High)
    ])
    .unwrap();
    let mut port = Port::with_reporter(&sim, &recorder);
    port.init(Some(&config)).unwrap();
    let before = sim.snapshot(PortId::C);
    sim.clear_accesses();

    for direction in [PinDirection::Input, PinDirection::Output] {
        assert_eq!(
            port.set_pin_direction(0, direction),
            Err(Error::DirectionUnchangeable { pin: 0 })
        );
    }
    for code in 0..=PinMode::MAX_CODE {
        assert_eq!(port.set_pin_mode(0, code), Err(Error::ModeUnchangeable { pin: 0 }));
    }

    assert_eq!(sim.snapshot(PortId::C), before);
    assert!(writes(&sim).is_empty());
    let codes = recorder.codes();
    assert_eq!(codes.len(), 2 + 11);
    assert!(codes[..2]
        .iter()
        .all(|&c| c == (ApiId::SetPinDirection, FaultCode::DirectionUnchangeable)));
    assert!(codes[2..]
        .iter()
        .all(|&c| c == (ApiId::SetPinMode, FaultCode::ModeUnchangeable)));
}

#[test]
fn refresh_restores_fixed_directions_only() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();

    // Something else flipped PF1 (fixed output) and PF0 (changeable input).
    sim.poke(PortId::F, Register::Direction, 0b0000_0001);
    port.refresh_port_direction().unwrap();

    assert!(sim.bit(PortId::F, Register::Direction, PinNumber::P1));
    assert!(sim.bit(PortId::F, Register::Direction, PinNumber::P0));
}

#[test]
fn refresh_is_idempotent() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();

    port.refresh_port_direction().unwrap();
    let first = PortId::ALL.map(|p| sim.snapshot(p));
    port.refresh_port_direction().unwrap();
    assert_eq!(PortId::ALL.map(|p| sim.snapshot(p)), first);
}

#[test]
fn refresh_writes_only_direction_registers() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();
    sim.clear_accesses();

    port.refresh_port_direction().unwrap();
    assert!(!writes(&sim).is_empty());
    assert!(
        writes(&sim)
            .iter()
            .all(|(target, _)| matches!(target, AccessTarget::Port(_, Register::Direction)))
    );
}

#[test]
fn init_levels_and_resistors_override_prior_state() {
    let sim = SimulatedRegisters::new();
    for register in [Register::Data, Register::PullUp, Register::PullDown] {
        sim.poke(PortId::A, register, 0xFF);
    }
    let config = ConfigurationSet::new([
        PinDescriptor::new(PortId::A, PinNumber::P2).output(LogicLevel::Low),
        PinDescriptor::new(PortId::A, PinNumber::P3).input(InternalResistor::Off),
        PinDescriptor::new(PortId::A, PinNumber::P4).input(InternalResistor::PullDown),
    ])
    .unwrap();
    Port::new(&sim).init(Some(&config)).unwrap();

    assert!(!sim.bit(PortId::A, Register::Data, PinNumber::P2));
    assert!(!sim.bit(PortId::A, Register::PullUp, PinNumber::P3));
    assert!(!sim.bit(PortId::A, Register::PullDown, PinNumber::P3));
    assert!(!sim.bit(PortId::A, Register::PullUp, PinNumber::P4));
    assert!(sim.bit(PortId::A, Register::PullDown, PinNumber::P4));
    assert!(!sim.bit(PortId::A, Register::Direction, PinNumber::P4));
}

#[test]
fn set_pin_mode_dio_resets_every_mode_bit() {
    let sim = SimulatedRegisters::new();
    let config = board();
    let mut port = Port::new(&sim);
    port.init(Some(&config)).unwrap();
    sim.poke(PortId::B, Register::AnalogModeSelect, 0xFF);
    sim.poke(PortId::B, Register::AltFunctionSelect, 0xFF);
    sim.poke(PortId::B, Register::DigitalEnable, 0x00);
    sim.poke(PortId::B, Register::PortControl, 0xFFFF_FFFF);

    port.set_pin_mode(2, u8::from(PinMode::Dio)).unwrap();
    let pin = PinNumber::P1;
    assert!(sim.bit(PortId::B, Register::DigitalEnable, pin));
    assert!(!sim.bit(PortId::B, Register::AnalogModeSelect, pin));
    assert!(!sim.bit(PortId::B, Register::AltFunctionSelect, pin));
    assert_eq!(sim.mux_slot(PortId::B, pin), 0);
}
