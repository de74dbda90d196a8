use log::{debug, error, info};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use serde::Deserialize;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::constants::MAX_DRINKS_IN_RANDOM_ORDER;
use crate::errors::VendingMachineError;
use crate::ingredient::Drink;
use crate::order::Order;
use crate::orders_queue::OrdersQueue;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    drink: Drink,
    count: u64,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn parse_orders<R: Read>(reader: R) -> Result<Vec<JsonOrder>, Box<dyn Error>> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn add_orders_to_queue(json_orders: Vec<JsonOrder>) -> OrdersQueue {
    let mut queue = OrdersQueue::new();
    for (id, order) in json_orders.into_iter().enumerate() {
        queue.push(Order::new(id, order.drink, order.count));
        debug!("[READER] Added order {}: {} {}", id, order.count, order.drink);
    }
    info!("[READER] No more orders left");
    queue
}

/// Lee los pedidos de un archivo json con la forma `{"orders": [{"drink": "tea", "count": 2}]}`
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<OrdersQueue, VendingMachineError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        error!("[READER] Could not open {:?}: {}", path.as_ref(), err);
        VendingMachineError::FileReaderError
    })?;
    read_orders_from(BufReader::new(file))
}

pub fn read_orders_from<R: Read>(reader: R) -> Result<OrdersQueue, VendingMachineError> {
    match parse_orders(reader) {
        Ok(json_orders) => Ok(add_orders_to_queue(json_orders)),
        Err(err) => {
            error!("[READER] Invalid orders file: {}", err);
            Err(VendingMachineError::FileReaderError)
        }
    }
}

/// Genera `n` pedidos al azar entre las bebidas dadas
pub fn random_orders(n: usize, drinks: &[Drink]) -> OrdersQueue {
    let mut rng = thread_rng();
    let mut queue = OrdersQueue::new();
    for id in 0..n {
        if let Some(drink) = drinks.choose(&mut rng) {
            let count = rng.gen_range(1, MAX_DRINKS_IN_RANDOM_ORDER + 1);
            queue.push(Order::new(id, *drink, count));
            debug!("[READER] Generated order {}: {} {}", id, count, drink);
        }
    }
    queue
}
