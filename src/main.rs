pub mod catalog;
pub mod config;
pub mod constants;
pub mod container;
pub mod dispenser;
pub mod errors;
pub mod ingredient;
pub mod material_manager;
pub mod order;
pub mod orders_queue;
pub mod orders_reader;
pub mod parameters;
pub mod product;
pub mod statistics;
pub mod vending_machine;

use std::{env, path::Path, process, sync::Arc};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use config::{read_config, MachineConfig};
use constants::{DEFAULT_ORDERS_FILE, RANDOM_ORDERS};
use dispenser::Dispenser;
use errors::VendingMachineError;
use orders_reader::{random_orders, read_orders};
use statistics::StatisticsPrinter;

fn run(orders_path: Option<String>, config_path: Option<String>) -> Result<(), VendingMachineError> {
    let config = match config_path {
        Some(path) => read_config(path)?,
        None => MachineConfig::default(),
    };
    let machine = Arc::new(config.into_machine()?);

    let orders_path = orders_path.unwrap_or_else(|| DEFAULT_ORDERS_FILE.to_string());
    let mut orders = if Path::new(&orders_path).exists() {
        read_orders(&orders_path)?
    } else {
        info!("[MAIN] {} not found, generating {} random orders", orders_path, RANDOM_ORDERS);
        random_orders(RANDOM_ORDERS, &machine.catalog().drinks())
    };

    let dispenser = Dispenser::new(0, machine.clone());
    dispenser.handle_orders(&mut orders)?;

    StatisticsPrinter::new(machine).print_statistics()
}

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let mut args = env::args().skip(1);
    let orders_path = args.next();
    let config_path = args.next();

    if let Err(err) = run(orders_path, config_path) {
        error!("[MAIN] {}", err);
        process::exit(1);
    }
}
