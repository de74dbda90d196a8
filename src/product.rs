//! Operaciones de una bebida: disponibilidad de materiales, costo y actualizacion de totales.
use log::debug;
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    container::Container,
    constants::MINIMUM_RESERVE,
    errors::VendingMachineError,
    ingredient::{sorted_entries, Drink, IngredientMap},
    material_manager::material_quantity_left,
    parameters::{DrinkTotals, ProductParameters},
};

/// Indica si el desperdicio se cobra junto con la bebida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WastageCostPolicy {
    /// Se cobra solo el precio de la bebida
    Excluded,
    /// Se suma `desperdicio por unidad * cantidad * precio del ingrediente` por cada ingrediente desperdiciado
    Included,
}

impl Default for WastageCostPolicy {
    fn default() -> Self {
        WastageCostPolicy::Excluded
    }
}

/// Reglas configurables que aplican a todas las bebidas
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductRules {
    pub wastage_cost: WastageCostPolicy,
    pub minimum_reserve: f64,
}

impl Default for ProductRules {
    fn default() -> Self {
        ProductRules {
            wastage_cost: WastageCostPolicy::default(),
            minimum_reserve: MINIMUM_RESERVE,
        }
    }
}

/// Una bebida del catalogo, con sus tablas ya resueltas
pub struct Product<'a> {
    drink: Drink,
    consumption: &'a IngredientMap,
    wastage: &'a IngredientMap,
    unit_price: f64,
    catalog: &'a Catalog,
    rules: ProductRules,
}

impl<'a> Product<'a> {
    pub fn new(
        drink: Drink,
        catalog: &'a Catalog,
        rules: ProductRules,
    ) -> Result<Product<'a>, VendingMachineError> {
        Ok(Product {
            drink,
            consumption: catalog.consumption(drink)?,
            wastage: catalog.wastage(drink)?,
            unit_price: catalog.unit_price(drink)?,
            catalog,
            rules,
        })
    }

    pub fn consumption(&self) -> &IngredientMap {
        self.consumption
    }

    pub fn wastage(&self) -> &IngredientMap {
        self.wastage
    }

    /// Devuelve `Ok(true)` si alcanzan los materiales para `count` bebidas.
    /// Los ingredientes que la bebida no consume no se chequean.
    pub fn check_availability(
        &self,
        container: &Container,
        count: u64,
    ) -> Result<bool, VendingMachineError> {
        let left = material_quantity_left(container, self.consumption, count);
        for (ingredient, remaining) in sorted_entries(&left) {
            let per_unit = self.consumption.get(&ingredient).copied().unwrap_or(0.0);
            if per_unit == 0.0 {
                continue;
            }
            if remaining < self.rules.minimum_reserve {
                debug!(
                    "[PRODUCT] Not enough {} for {} {}, {} would remain",
                    ingredient, count, self.drink, remaining
                );
                return Err(VendingMachineError::InsufficientMaterial {
                    drink: self.drink,
                    ingredient,
                    remaining,
                });
            }
        }
        Ok(true)
    }

    /// Costo de `count` bebidas
    pub fn cost(&self, count: u64) -> f64 {
        self.unit_price * count as f64 + self.wastage_cost(count)
    }

    fn wastage_cost(&self, count: u64) -> f64 {
        match self.rules.wastage_cost {
            WastageCostPolicy::Excluded => 0.0,
            WastageCostPolicy::Included => self
                .wastage
                .iter()
                .map(|(ingredient, waste)| {
                    waste * count as f64 * self.catalog.material_price(*ingredient)
                })
                .sum(),
        }
    }

    /// Suma el pedido a los totales de la bebida y devuelve los totales actualizados
    pub fn update_parameters<'p>(
        &self,
        parameters: &'p mut ProductParameters,
        count: u64,
        order_cost: f64,
    ) -> &'p DrinkTotals {
        parameters.accumulate(self.drink, count, order_cost, self.wastage)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{container::Capacity, ingredient::Ingredient};

    fn full_container() -> Container {
        Container::with_levels(
            Capacity {
                coffee: 2000.0,
                tea: 2000.0,
                milk: 10000.0,
                sugar: 8000.0,
                water: 15000.0,
            },
            Capacity::default(),
        )
    }

    /// Contenedores con lo justo para que 8 bebidas dejen coffee=2, water=1, milk=9, sugar=1
    fn scarce_container() -> Container {
        Container::with_levels(
            Capacity {
                coffee: 42.0,
                tea: 2000.0,
                milk: 329.0,
                sugar: 121.0,
                water: 481.0,
            },
            Capacity::default(),
        )
    }

    fn scarce_catalog() -> Catalog {
        let consumption: IngredientMap = vec![
            (Ingredient::Coffee, 5.0),
            (Ingredient::Water, 60.0),
            (Ingredient::Milk, 40.0),
            (Ingredient::Sugar, 15.0),
        ]
        .into_iter()
        .collect();
        let mut consumption_table = HashMap::new();
        consumption_table.insert(Drink::BlackCoffee, consumption);
        let mut wastage_table = HashMap::new();
        wastage_table.insert(Drink::BlackCoffee, IngredientMap::new());
        let mut prices = HashMap::new();
        prices.insert(Drink::BlackCoffee, 10.0);
        Catalog::new(consumption_table, wastage_table, prices, IngredientMap::new()).unwrap()
    }

    #[test]
    fn should_return_true_if_enough_material_present() {
        let catalog = Catalog::default();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        assert_eq!(Ok(true), product.check_availability(&full_container(), 2));
    }

    #[test]
    fn should_return_error_if_material_not_present() {
        let catalog = scarce_catalog();
        let rules = ProductRules {
            minimum_reserve: 10.0,
            ..ProductRules::default()
        };
        let product = Product::new(Drink::BlackCoffee, &catalog, rules).unwrap();

        let result = product.check_availability(&scarce_container(), 8);

        assert_eq!(
            Err(VendingMachineError::InsufficientMaterial {
                drink: Drink::BlackCoffee,
                ingredient: Ingredient::Coffee,
                remaining: 2.0,
            }),
            result
        );
    }

    #[test]
    fn should_accept_exact_remainders_without_reserve() {
        let catalog = scarce_catalog();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        assert_eq!(Ok(true), product.check_availability(&scarce_container(), 8));
    }

    #[test]
    fn should_return_error_if_remaining_goes_negative() {
        let catalog = scarce_catalog();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        let mut container = scarce_container();
        container.water = 400.0;

        let result = product.check_availability(&container, 8);

        assert_eq!(
            Err(VendingMachineError::InsufficientMaterial {
                drink: Drink::BlackCoffee,
                ingredient: Ingredient::Water,
                remaining: -80.0,
            }),
            result
        );
    }

    #[test]
    fn should_not_check_ingredients_with_zero_consumption() {
        let catalog = Catalog::default();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        let mut container = full_container();
        container.milk = 0.0;
        assert_eq!(Ok(true), product.check_availability(&container, 2));
    }

    #[test]
    fn should_not_modify_the_container_when_checking() {
        let catalog = Catalog::default();
        let product = Product::new(Drink::Coffee, &catalog, ProductRules::default()).unwrap();
        let container = full_container();
        product.check_availability(&container, 3).unwrap();
        assert_eq!(full_container(), container);
    }

    #[test]
    fn should_return_product_cost() {
        let catalog = Catalog::default();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        assert_eq!(20.0, product.cost(2));
        assert_eq!(product.cost(2), product.cost(2));
    }

    #[test]
    fn should_add_wastage_cost_when_included() {
        let base = Catalog::default();
        let mut material_prices = IngredientMap::new();
        material_prices.insert(Ingredient::Water, 0.5);
        material_prices.insert(Ingredient::Sugar, 1.0);
        let catalog = Catalog::new(
            Drink::ALL
                .iter()
                .map(|d| (*d, base.consumption(*d).unwrap().clone()))
                .collect(),
            Drink::ALL
                .iter()
                .map(|d| (*d, base.wastage(*d).unwrap().clone()))
                .collect(),
            base.price_table().clone(),
            material_prices,
        )
        .unwrap();
        let rules = ProductRules {
            wastage_cost: WastageCostPolicy::Included,
            ..ProductRules::default()
        };
        let product = Product::new(Drink::BlackCoffee, &catalog, rules).unwrap();

        // 2 * 10 + 2 * 12 * 0.5 + 2 * 2 * 1.0
        assert_eq!(36.0, product.cost(2));
    }

    #[test]
    fn should_return_count_total_cost_and_total_wastage() {
        let catalog = Catalog::default();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        let mut parameters = ProductParameters::new();

        let totals = product.update_parameters(&mut parameters, 2, 10.0);

        assert_eq!(2, totals.count);
        assert_eq!(10.0, totals.total_cost);
        assert_eq!(Some(&24.0), totals.total_waste.get(&Ingredient::Water));
    }

    #[test]
    fn should_accumulate_parameters_across_orders() {
        let catalog = Catalog::default();
        let product = Product::new(Drink::BlackCoffee, &catalog, ProductRules::default()).unwrap();
        let mut parameters = ProductParameters::new();

        product.update_parameters(&mut parameters, 2, 10.0);
        let totals = product.update_parameters(&mut parameters, 2, 10.0);

        assert_eq!(4, totals.count);
        assert_eq!(20.0, totals.total_cost);
    }

    #[test]
    fn should_fail_for_a_drink_missing_from_the_catalog() {
        let catalog = scarce_catalog();
        let result = Product::new(Drink::Tea, &catalog, ProductRules::default());
        assert_eq!(true, matches!(result, Err(VendingMachineError::UnknownDrink)));
    }
}
