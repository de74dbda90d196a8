use std::sync::Arc;

use log::info;

use crate::{
    errors::VendingMachineError,
    ingredient::Ingredient,
    vending_machine::VendingMachine,
};

pub struct StatisticsPrinter {
    machine: Arc<VendingMachine>,
}

impl StatisticsPrinter {
    pub fn new(machine: Arc<VendingMachine>) -> StatisticsPrinter {
        StatisticsPrinter { machine }
    }

    pub fn print_statistics(&self) -> Result<(), VendingMachineError> {
        let statistics = self.statistics()?;
        info!("{}", statistics);
        println!("{}", statistics);
        Ok(())
    }

    pub fn statistics(&self) -> Result<String, VendingMachineError> {
        let mut statistics = format!(
            "[STATISTICS] Total sale={} | Drink=(count, cost) |",
            self.machine.total_sale()?
        );
        self.add_drinks_to_statistics_string(&mut statistics)?;
        statistics.push_str("| Ingredient=(remaining, capacity) |");
        self.add_resources_to_statistics_string(&mut statistics)?;
        Ok(statistics)
    }

    fn add_drinks_to_statistics_string(
        &self,
        statistics: &mut String,
    ) -> Result<(), VendingMachineError> {
        let parameters = self.machine.totals()?;
        for (drink, totals) in parameters.iter_sorted() {
            statistics.push_str(&format!(" {}=({},{}) ", drink, totals.count, totals.total_cost));
        }
        Ok(())
    }

    fn add_resources_to_statistics_string(
        &self,
        statistics: &mut String,
    ) -> Result<(), VendingMachineError> {
        let container = self.machine.container_status()?;
        for ingredient in Ingredient::ALL.iter() {
            statistics.push_str(&format!(
                " {}=({},{}) ",
                ingredient,
                container.level(*ingredient),
                container.capacity().of(*ingredient)
            ));
        }
        Ok(())
    }
}
