//! Totales acumulados de los pedidos despachados
use std::collections::HashMap;

use crate::ingredient::{Drink, IngredientMap};

/// Totales de una bebida: cantidad despachada, lo cobrado y lo desperdiciado por ingrediente
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrinkTotals {
    pub count: u64,
    pub total_cost: f64,
    pub total_waste: IngredientMap,
}

/// Totales por bebida. Se actualiza despues de cada pedido y no se reinicia.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductParameters {
    totals: HashMap<Drink, DrinkTotals>,
}

impl ProductParameters {
    pub fn new() -> ProductParameters {
        ProductParameters::default()
    }

    /// Suma `count` bebidas, su costo y `waste_per_unit * count` a los totales de la bebida
    pub fn accumulate(
        &mut self,
        drink: Drink,
        count: u64,
        order_cost: f64,
        waste_per_unit: &IngredientMap,
    ) -> &DrinkTotals {
        let totals = self.totals.entry(drink).or_default();
        totals.count += count;
        totals.total_cost += order_cost;
        for (ingredient, waste) in waste_per_unit {
            *totals.total_waste.entry(*ingredient).or_insert(0.0) += waste * count as f64;
        }
        totals
    }

    pub fn totals(&self, drink: Drink) -> DrinkTotals {
        self.totals.get(&drink).cloned().unwrap_or_default()
    }

    /// Lo cobrado entre todas las bebidas
    pub fn total_sale(&self) -> f64 {
        self.totals.values().map(|totals| totals.total_cost).sum()
    }

    pub fn total_count(&self) -> u64 {
        self.totals.values().map(|totals| totals.count).sum()
    }

    /// Totales ordenados por bebida
    pub fn iter_sorted(&self) -> Vec<(Drink, &DrinkTotals)> {
        let mut entries: Vec<(Drink, &DrinkTotals)> =
            self.totals.iter().map(|(drink, totals)| (*drink, totals)).collect();
        entries.sort_by_key(|(drink, _)| *drink);
        entries
    }
}
