//! Tablas fijas de la maquina: consumo por bebida, desperdicio por bebida y precios.
use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    errors::VendingMachineError,
    ingredient::{Drink, Ingredient, IngredientMap},
};

/// Tablas de consulta de la maquina, indexadas por bebida.
/// Todas las bebidas del catalogo tienen consumo, desperdicio y precio, ver [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    consumption: HashMap<Drink, IngredientMap>,
    wastage: HashMap<Drink, IngredientMap>,
    prices: HashMap<Drink, f64>,
    /// Precio por unidad de cada ingrediente, solo se usa para cobrar el desperdicio
    #[serde(default)]
    material_prices: IngredientMap,
}

impl Catalog {
    pub fn new(
        consumption: HashMap<Drink, IngredientMap>,
        wastage: HashMap<Drink, IngredientMap>,
        prices: HashMap<Drink, f64>,
        material_prices: IngredientMap,
    ) -> Result<Catalog, VendingMachineError> {
        let catalog = Catalog {
            consumption,
            wastage,
            prices,
            material_prices,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Chequea que toda bebida con precio tenga consumo y desperdicio, y que no haya cantidades negativas
    pub fn validate(&self) -> Result<(), VendingMachineError> {
        for drink in self.prices.keys() {
            let consumption = self
                .consumption
                .get(drink)
                .ok_or(VendingMachineError::UnknownDrink)?;
            let wastage = self
                .wastage
                .get(drink)
                .ok_or(VendingMachineError::UnknownDrink)?;
            let negative = consumption
                .values()
                .chain(wastage.values())
                .any(|quantity| *quantity < 0.0);
            if negative {
                return Err(VendingMachineError::InvalidQuantity);
            }
        }
        if self.prices.values().any(|price| *price < 0.0) {
            return Err(VendingMachineError::InvalidQuantity);
        }
        Ok(())
    }

    /// Consumo por unidad de la bebida
    pub fn consumption(&self, drink: Drink) -> Result<&IngredientMap, VendingMachineError> {
        self.consumption
            .get(&drink)
            .ok_or(VendingMachineError::UnknownDrink)
    }

    /// Desperdicio por unidad de la bebida
    pub fn wastage(&self, drink: Drink) -> Result<&IngredientMap, VendingMachineError> {
        self.wastage
            .get(&drink)
            .ok_or(VendingMachineError::UnknownDrink)
    }

    /// Tabla de precios completa
    pub fn price_table(&self) -> &HashMap<Drink, f64> {
        &self.prices
    }

    pub fn unit_price(&self, drink: Drink) -> Result<f64, VendingMachineError> {
        self.prices
            .get(&drink)
            .copied()
            .ok_or(VendingMachineError::UnknownDrink)
    }

    /// Precio de una unidad de ingrediente desperdiciada. Si no esta en la tabla no se cobra.
    pub fn material_price(&self, ingredient: Ingredient) -> f64 {
        self.material_prices
            .get(&ingredient)
            .copied()
            .unwrap_or(0.0)
    }

    /// Bebidas que se pueden vender, ordenadas
    pub fn drinks(&self) -> Vec<Drink> {
        let mut drinks: Vec<Drink> = self.prices.keys().copied().collect();
        drinks.sort();
        drinks
    }
}

fn ingredient_map(entries: &[(Ingredient, f64)]) -> IngredientMap {
    entries.iter().copied().collect()
}

impl Default for Catalog {
    fn default() -> Self {
        let mut consumption = HashMap::new();
        consumption.insert(
            Drink::Tea,
            ingredient_map(&[
                (Ingredient::Tea, 5.0),
                (Ingredient::Water, 60.0),
                (Ingredient::Milk, 40.0),
                (Ingredient::Sugar, 15.0),
            ]),
        );
        consumption.insert(
            Drink::BlackTea,
            ingredient_map(&[
                (Ingredient::Tea, 3.0),
                (Ingredient::Water, 100.0),
                (Ingredient::Milk, 0.0),
                (Ingredient::Sugar, 15.0),
            ]),
        );
        consumption.insert(
            Drink::Coffee,
            ingredient_map(&[
                (Ingredient::Coffee, 4.0),
                (Ingredient::Water, 20.0),
                (Ingredient::Milk, 80.0),
                (Ingredient::Sugar, 15.0),
            ]),
        );
        consumption.insert(
            Drink::BlackCoffee,
            ingredient_map(&[
                (Ingredient::Coffee, 3.0),
                (Ingredient::Water, 100.0),
                (Ingredient::Milk, 0.0),
                (Ingredient::Sugar, 15.0),
            ]),
        );

        let mut wastage = HashMap::new();
        wastage.insert(
            Drink::Tea,
            ingredient_map(&[
                (Ingredient::Tea, 1.0),
                (Ingredient::Water, 5.0),
                (Ingredient::Milk, 4.0),
                (Ingredient::Sugar, 2.0),
            ]),
        );
        wastage.insert(
            Drink::BlackTea,
            ingredient_map(&[
                (Ingredient::Tea, 0.0),
                (Ingredient::Water, 12.0),
                (Ingredient::Sugar, 2.0),
            ]),
        );
        wastage.insert(
            Drink::Coffee,
            ingredient_map(&[
                (Ingredient::Coffee, 1.0),
                (Ingredient::Water, 3.0),
                (Ingredient::Milk, 8.0),
                (Ingredient::Sugar, 2.0),
            ]),
        );
        wastage.insert(
            Drink::BlackCoffee,
            ingredient_map(&[
                (Ingredient::Coffee, 0.0),
                (Ingredient::Water, 12.0),
                (Ingredient::Sugar, 2.0),
            ]),
        );

        let mut prices = HashMap::new();
        prices.insert(Drink::Tea, 10.0);
        prices.insert(Drink::BlackTea, 5.0);
        prices.insert(Drink::Coffee, 15.0);
        prices.insert(Drink::BlackCoffee, 10.0);

        Catalog {
            consumption,
            wastage,
            prices,
            material_prices: IngredientMap::new(),
        }
    }
}
