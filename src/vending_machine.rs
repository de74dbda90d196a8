//! Maquina de te y cafe. Dueña de los contenedores y de los totales acumulados.
use std::sync::Mutex;

use log::{debug, info, warn};

use crate::{
    catalog::Catalog,
    constants::LOW_STOCK_PERCENTAGE,
    container::Container,
    errors::VendingMachineError,
    ingredient::{sorted_entries, Drink, Ingredient, IngredientMap},
    material_manager::material_quantity_left,
    order::Order,
    parameters::ProductParameters,
    product::{Product, ProductRules},
};

/// Estado de la maquina. Los contenedores y los totales estan detras de un lock,
/// siempre se toma primero el de los contenedores y despues el de los totales.
pub struct VendingMachine {
    catalog: Catalog,
    rules: ProductRules,
    container: Mutex<Container>,
    parameters: Mutex<ProductParameters>,
}

impl VendingMachine {
    pub fn new(catalog: Catalog, rules: ProductRules, container: Container) -> VendingMachine {
        VendingMachine {
            catalog,
            rules,
            container: Mutex::new(container),
            parameters: Mutex::new(ProductParameters::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product(&self, drink: Drink) -> Result<Product<'_>, VendingMachineError> {
        Product::new(drink, &self.catalog, self.rules)
    }

    /// Prepara el pedido: chequea los materiales, calcula el costo, consume de los contenedores
    /// (lo usado mas lo desperdiciado) y suma a los totales. Devuelve el costo del pedido.
    /// Si no alcanzan los materiales no se modifica nada.
    pub fn process_order(&self, order: &Order) -> Result<f64, VendingMachineError> {
        if order.count == 0 {
            return Err(VendingMachineError::InvalidQuantity);
        }
        let product = self.product(order.drink)?;
        let mut container = self.container.lock()?;

        product.check_availability(&container, order.count)?;
        let draw = total_draw(&product);
        check_draw(&container, order.drink, &draw, order.count)?;
        let cost = product.cost(order.count);
        container.consume(&draw, order.count);
        self.warn_low_stock(&container);

        let mut parameters = self.parameters.lock()?;
        let totals = product.update_parameters(&mut parameters, order.count, cost);
        info!(
            "[MACHINE] Order {}: {} {} for {}, {} {} sold so far",
            order.id, order.count, order.drink, cost, totals.count, order.drink
        );
        Ok(cost)
    }

    fn warn_low_stock(&self, container: &Container) {
        for ingredient in Ingredient::ALL.iter() {
            let percentage = container.percentage_left(*ingredient);
            if percentage < LOW_STOCK_PERCENTAGE {
                warn!(
                    "[MACHINE] {} container is at {:.1}% of its capacity",
                    ingredient, percentage
                );
            }
        }
    }

    /// Repone un contenedor, sin pasarse de su capacidad. Devuelve lo que se agrego.
    pub fn refill(&self, ingredient: Ingredient, quantity: f64) -> Result<f64, VendingMachineError> {
        let mut container = self.container.lock()?;
        let added = container.refill(ingredient, quantity)?;
        info!(
            "[MACHINE] Refilled {} with {}, there is {}",
            ingredient,
            added,
            container.level(ingredient)
        );
        Ok(added)
    }

    pub fn reset_container(&self) -> Result<(), VendingMachineError> {
        self.container.lock()?.reset();
        info!("[MACHINE] Containers reset to full capacity");
        Ok(())
    }

    pub fn container_status(&self) -> Result<Container, VendingMachineError> {
        Ok(self.container.lock()?.clone())
    }

    pub fn totals(&self) -> Result<ProductParameters, VendingMachineError> {
        Ok(self.parameters.lock()?.clone())
    }

    pub fn total_sale(&self) -> Result<f64, VendingMachineError> {
        Ok(self.parameters.lock()?.total_sale())
    }
}

/// Lo que sale de los contenedores por cada bebida: lo usado mas lo desperdiciado
fn total_draw(product: &Product) -> IngredientMap {
    let mut draw = product.consumption().clone();
    for (ingredient, waste) in product.wastage() {
        *draw.entry(*ingredient).or_insert(0.0) += waste;
    }
    draw
}

/// Los contenedores tienen que cubrir tambien el desperdicio, si no el pedido no se prepara
fn check_draw(
    container: &Container,
    drink: Drink,
    draw: &IngredientMap,
    count: u64,
) -> Result<(), VendingMachineError> {
    let left = material_quantity_left(container, draw, count);
    for (ingredient, remaining) in sorted_entries(&left) {
        if remaining < 0.0 {
            debug!(
                "[MACHINE] Not enough {} to cover the wastage of {} {}",
                ingredient, count, drink
            );
            return Err(VendingMachineError::InsufficientMaterial {
                drink,
                ingredient,
                remaining,
            });
        }
    }
    Ok(())
}

impl Default for VendingMachine {
    fn default() -> Self {
        VendingMachine::new(Catalog::default(), ProductRules::default(), Container::default())
    }
}
