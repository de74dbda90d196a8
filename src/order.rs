use crate::ingredient::Drink;

/// Pedido de `count` bebidas iguales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    pub id: usize,
    pub drink: Drink,
    pub count: u64,
}

impl Order {
    pub fn new(id: usize, drink: Drink, count: u64) -> Order {
        Order { id, drink, count }
    }
}
