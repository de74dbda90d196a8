//! Ingredientes y bebidas que maneja la maquina
use std::{collections::HashMap, fmt};

use serde::Deserialize;

pub const TOTAL_INGREDIENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Coffee,
    Tea,
    Milk,
    Sugar,
    Water,
}

impl Ingredient {
    /// Todos los ingredientes, en el orden en que se chequean y se reportan
    pub const ALL: [Ingredient; TOTAL_INGREDIENTS] = [
        Ingredient::Coffee,
        Ingredient::Tea,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Water,
    ];
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Tea => "tea",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Water => "water",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Drink {
    #[serde(rename = "tea")]
    Tea,
    #[serde(rename = "black tea")]
    BlackTea,
    #[serde(rename = "coffee")]
    Coffee,
    #[serde(rename = "black coffee")]
    BlackCoffee,
}

impl Drink {
    pub const ALL: [Drink; 4] = [Drink::Tea, Drink::BlackTea, Drink::Coffee, Drink::BlackCoffee];
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Drink::Tea => "tea",
            Drink::BlackTea => "black tea",
            Drink::Coffee => "coffee",
            Drink::BlackCoffee => "black coffee",
        };
        write!(f, "{}", name)
    }
}

/// Cantidad por ingrediente. Se usa para consumo y desperdicio por bebida y para lo que queda en los contenedores.
pub type IngredientMap = HashMap<Ingredient, f64>;

/// Devuelve los pares del mapa ordenados por ingrediente
pub fn sorted_entries(map: &IngredientMap) -> Vec<(Ingredient, f64)> {
    let mut entries: Vec<(Ingredient, f64)> = map.iter().map(|(i, q)| (*i, *q)).collect();
    entries.sort_by_key(|(ingredient, _)| *ingredient);
    entries
}
