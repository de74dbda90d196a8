//! Contenedores de materia prima de la maquina
use serde::Deserialize;

use crate::{
    constants::{
        COFFEE_CONTAINER_CAPACITY, MILK_CONTAINER_CAPACITY, SUGAR_CONTAINER_CAPACITY,
        TEA_CONTAINER_CAPACITY, WATER_CONTAINER_CAPACITY,
    },
    errors::VendingMachineError,
    ingredient::{Ingredient, IngredientMap},
};

/// Niveles de los cinco contenedores, junto con su capacidad maxima
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub coffee: f64,
    pub tea: f64,
    pub milk: f64,
    pub sugar: f64,
    pub water: f64,
    capacity: Capacity,
}

/// Cantidad por contenedor. Se usa para la capacidad maxima y para los niveles iniciales.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Capacity {
    pub coffee: f64,
    pub tea: f64,
    pub milk: f64,
    pub sugar: f64,
    pub water: f64,
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity {
            coffee: COFFEE_CONTAINER_CAPACITY,
            tea: TEA_CONTAINER_CAPACITY,
            milk: MILK_CONTAINER_CAPACITY,
            sugar: SUGAR_CONTAINER_CAPACITY,
            water: WATER_CONTAINER_CAPACITY,
        }
    }
}

impl Capacity {
    pub fn of(&self, ingredient: Ingredient) -> f64 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Tea => self.tea,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Water => self.water,
        }
    }
}

impl Container {
    /// Crea los contenedores llenos
    pub fn new(capacity: Capacity) -> Container {
        Container {
            coffee: capacity.coffee,
            tea: capacity.tea,
            milk: capacity.milk,
            sugar: capacity.sugar,
            water: capacity.water,
            capacity,
        }
    }

    pub fn with_levels(levels: Capacity, capacity: Capacity) -> Container {
        Container {
            coffee: levels.coffee,
            tea: levels.tea,
            milk: levels.milk,
            sugar: levels.sugar,
            water: levels.water,
            capacity,
        }
    }

    pub fn capacity(&self) -> &Capacity {
        &self.capacity
    }

    pub fn level(&self, ingredient: Ingredient) -> f64 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Tea => self.tea,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Water => self.water,
        }
    }

    fn level_mut(&mut self, ingredient: Ingredient) -> &mut f64 {
        match ingredient {
            Ingredient::Coffee => &mut self.coffee,
            Ingredient::Tea => &mut self.tea,
            Ingredient::Milk => &mut self.milk,
            Ingredient::Sugar => &mut self.sugar,
            Ingredient::Water => &mut self.water,
        }
    }

    /// Resta las cantidades del mapa multiplicadas por `count`. Nunca queda por debajo de 0.
    pub fn consume(&mut self, quantities: &IngredientMap, count: u64) {
        for (ingredient, per_unit) in quantities {
            let level = self.level_mut(*ingredient);
            *level = (*level - per_unit * count as f64).max(0.0);
        }
    }

    /// Repone hasta la capacidad del contenedor. Devuelve lo que realmente se agrego.
    pub fn refill(&mut self, ingredient: Ingredient, quantity: f64) -> Result<f64, VendingMachineError> {
        if quantity < 0.0 || quantity.is_nan() {
            return Err(VendingMachineError::InvalidQuantity);
        }
        let capacity = self.capacity.of(ingredient);
        let level = self.level_mut(ingredient);
        let added = quantity.min(capacity - *level).max(0.0);
        *level += added;
        Ok(added)
    }

    /// Vuelve a llenar todos los contenedores
    pub fn reset(&mut self) {
        *self = Container::new(self.capacity);
    }

    /// Porcentaje de la capacidad que queda en el contenedor
    pub fn percentage_left(&self, ingredient: Ingredient) -> f64 {
        let capacity = self.capacity.of(ingredient);
        if capacity <= 0.0 {
            return 0.0;
        }
        self.level(ingredient) * 100.0 / capacity
    }
}

impl Default for Container {
    fn default() -> Self {
        Container::new(Capacity::default())
    }
}
