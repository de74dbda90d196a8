//! Calculo de lo que queda en los contenedores despues de un pedido
use crate::{
    container::Container,
    ingredient::IngredientMap,
};

/// Devuelve, para cada ingrediente del consumo, cuanto quedaria en el contenedor
/// despues de preparar `count` bebidas. No modifica el contenedor.
pub fn material_quantity_left(
    container: &Container,
    consumption: &IngredientMap,
    count: u64,
) -> IngredientMap {
    consumption
        .iter()
        .map(|(ingredient, per_unit)| {
            let remaining = container.level(*ingredient) - per_unit * count as f64;
            (*ingredient, remaining)
        })
        .collect()
}
