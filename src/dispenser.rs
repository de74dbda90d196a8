//! Dispenser de la maquina. Procesa los pedidos de la cola.
use std::sync::Arc;

use log::{debug, error, info};

use crate::{
    errors::VendingMachineError,
    order::Order,
    orders_queue::OrdersQueue,
    vending_machine::VendingMachine,
};

/// Resultado de vaciar la cola de pedidos
#[derive(Debug, Default, PartialEq)]
pub struct DispenserSummary {
    pub orders_processed: u64,
    pub orders_skipped: u64,
}

/// Representa a un dispenser de la maquina.
/// Tiene una referencia a la maquina, que es quien tiene los contenedores y los totales.
pub struct Dispenser {
    id: usize,
    machine: Arc<VendingMachine>,
}

impl Dispenser {
    pub fn new(id: usize, machine: Arc<VendingMachine>) -> Dispenser {
        Dispenser { id, machine }
    }

    /// Despacha los pedidos en orden hasta vaciar la cola.
    /// Un pedido sin materiales suficientes se saltea; cualquier otro error corta el procesamiento.
    pub fn handle_orders(
        &self,
        orders: &mut OrdersQueue,
    ) -> Result<DispenserSummary, VendingMachineError> {
        let mut summary = DispenserSummary::default();
        while let Some(order) = orders.pop() {
            debug!("[DISPENSER {}] Takes order {}", self.id, order.id);
            if self.process_order(&order)? {
                summary.orders_processed += 1;
            } else {
                summary.orders_skipped += 1;
            }
        }
        info!(
            "[DISPENSER {}] No more orders, processed {} and skipped {}",
            self.id, summary.orders_processed, summary.orders_skipped
        );
        Ok(summary)
    }

    fn process_order(&self, order: &Order) -> Result<bool, VendingMachineError> {
        match self.machine.process_order(order) {
            Ok(_) => Ok(true),
            Err(VendingMachineError::InsufficientMaterial {
                ingredient,
                remaining,
                ..
            }) => {
                info!(
                    "[DISPENSER {}] Skipped order {}, not enough {} ({} would remain)",
                    self.id, order.id, ingredient, remaining
                );
                Ok(false)
            }
            Err(err) => {
                error!("[DISPENSER {}] Error in order {}: {}", self.id, order.id, err);
                Err(err)
            }
        }
    }
}
