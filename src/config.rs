//! Configuracion opcional de la maquina, leida de un archivo json.
//! Lo que no esta en el archivo toma los valores de [`crate::constants`] y del catalogo por defecto.
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{error, info};
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    container::{Capacity, Container},
    errors::VendingMachineError,
    ingredient::Ingredient,
    product::ProductRules,
    vending_machine::VendingMachine,
};

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MachineConfig {
    pub capacity: Capacity,
    /// Niveles iniciales. Si no estan, los contenedores arrancan llenos.
    pub levels: Option<Capacity>,
    pub catalog: Option<Catalog>,
    pub rules: ProductRules,
}

impl MachineConfig {
    pub fn into_machine(self) -> Result<VendingMachine, VendingMachineError> {
        let catalog = self.catalog.unwrap_or_default();
        catalog.validate()?;
        if self.rules.minimum_reserve < 0.0 {
            return Err(VendingMachineError::InvalidQuantity);
        }
        let levels = self.levels.unwrap_or(self.capacity);
        check_levels(&levels, &self.capacity)?;
        let container = Container::with_levels(levels, self.capacity);
        Ok(VendingMachine::new(catalog, self.rules, container))
    }
}

/// Cada nivel tiene que estar entre 0 y la capacidad de su contenedor
fn check_levels(levels: &Capacity, capacity: &Capacity) -> Result<(), VendingMachineError> {
    for ingredient in Ingredient::ALL.iter() {
        let level = levels.of(*ingredient);
        if !(0.0..=capacity.of(*ingredient)).contains(&level) {
            error!(
                "[CONFIG] Invalid {} level {}, capacity is {}",
                ingredient,
                level,
                capacity.of(*ingredient)
            );
            return Err(VendingMachineError::InvalidQuantity);
        }
    }
    Ok(())
}

fn parse_config<R: Read>(reader: R) -> Result<MachineConfig, Box<dyn Error>> {
    let config: MachineConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn read_config_from<R: Read>(reader: R) -> Result<MachineConfig, VendingMachineError> {
    parse_config(reader).map_err(|err| {
        error!("[CONFIG] Invalid machine configuration: {}", err);
        VendingMachineError::FileReaderError
    })
}

pub fn read_config<P: AsRef<Path>>(path: P) -> Result<MachineConfig, VendingMachineError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        error!("[CONFIG] Could not open {:?}: {}", path.as_ref(), err);
        VendingMachineError::FileReaderError
    })?;
    let config = read_config_from(BufReader::new(file))?;
    info!("[CONFIG] Loaded machine configuration from {:?}", path.as_ref());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ingredient::Drink, order::Order, product::WastageCostPolicy};

    #[test]
    fn should_use_defaults_for_an_empty_file() {
        let config = read_config_from("{}".as_bytes()).unwrap();
        assert_eq!(MachineConfig::default(), config);
        let machine = config.into_machine().unwrap();
        assert_eq!(Container::default(), machine.container_status().unwrap());
    }

    #[test]
    fn should_read_levels_and_rules() {
        let json = r#"{
            "levels": { "coffee": 100, "tea": 50, "milk": 0, "sugar": 300, "water": 1000 },
            "rules": { "wastage_cost": "included", "minimum_reserve": 5 }
        }"#;
        let config = read_config_from(json.as_bytes()).unwrap();
        assert_eq!(WastageCostPolicy::Included, config.rules.wastage_cost);
        assert_eq!(5.0, config.rules.minimum_reserve);

        let machine = config.into_machine().unwrap();
        let container = machine.container_status().unwrap();
        assert_eq!(100.0, container.coffee);
        assert_eq!(2000.0, container.capacity().coffee);
        assert_eq!(Ok(20.0), machine.process_order(&Order::new(0, Drink::BlackCoffee, 2)));
    }

    #[test]
    fn should_reject_a_negative_reserve() {
        let json = r#"{ "rules": { "minimum_reserve": -1 } }"#;
        let config = read_config_from(json.as_bytes()).unwrap();
        assert_eq!(true, matches!(config.into_machine(), Err(VendingMachineError::InvalidQuantity)));
    }

    #[test]
    fn should_reject_a_negative_level() {
        let json = r#"{
            "levels": { "coffee": -5, "tea": 50, "milk": 0, "sugar": 300, "water": 1000 }
        }"#;
        let config = read_config_from(json.as_bytes()).unwrap();
        assert_eq!(true, matches!(config.into_machine(), Err(VendingMachineError::InvalidQuantity)));
    }

    #[test]
    fn should_reject_a_level_above_capacity() {
        let json = r#"{
            "levels": { "coffee": 100, "tea": 50, "milk": 0, "sugar": 300, "water": 20000 }
        }"#;
        let config = read_config_from(json.as_bytes()).unwrap();
        assert_eq!(true, matches!(config.into_machine(), Err(VendingMachineError::InvalidQuantity)));
    }

    #[test]
    fn should_reject_a_negative_capacity() {
        let json = r#"{
            "capacity": { "coffee": 2000, "tea": -1, "milk": 10000, "sugar": 8000, "water": 15000 }
        }"#;
        let config = read_config_from(json.as_bytes()).unwrap();
        assert_eq!(true, matches!(config.into_machine(), Err(VendingMachineError::InvalidQuantity)));
    }

    #[test]
    fn should_fail_with_invalid_json() {
        let result = read_config_from("{ levels: ".as_bytes());
        assert_eq!(Err(VendingMachineError::FileReaderError), result);
    }
}
