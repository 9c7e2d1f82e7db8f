use anyhow::Context;
use clap::Parser;
use tm4c_port::Port;
use tm4c_port::registers::{Register, SimulatedRegisters};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cli::Commands;

mod board;
mod cli;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    setup_tracing(cli.verbose);

    let config = board::launchpad().context("LaunchPad pin table is invalid")?;
    if let Commands::Table = cli.command {
        board::print_table(&config);
        return Ok(());
    }

    let registers = SimulatedRegisters::new();
    let mut port = Port::new(&registers);
    port.init(Some(&config))?;

    match cli.command {
        Commands::Table | Commands::Init => {}
        Commands::SetDirection { pin, direction } => port
            .set_pin_direction(pin, direction.into())
            .with_context(|| format!("setting direction of pin {pin}"))?,
        Commands::SetMode { pin, mode } => port
            .set_pin_mode(pin, mode)
            .with_context(|| format!("setting mode of pin {pin}"))?,
        Commands::Refresh { scramble } => {
            if scramble {
                for p in board::used_ports(&config) {
                    let inverted = !registers.word(p, Register::Direction) & 0xFF;
                    registers.poke(p, Register::Direction, inverted);
                }
            }
            port.refresh_port_direction()?;
        }
    }

    println!("Status: {:?}\n", port.status());
    let state = port.registers();
    for p in board::used_ports(&config) {
        println!("{}\n", state.snapshot(p));
    }
    println!("RCGC2  {:08b}", state.clock_gate());
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
