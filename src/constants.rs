//! Parametros de configuracion de la maquina de te y cafe

/// Capacidad inicial del contenedor de cafe (gramos)
pub const COFFEE_CONTAINER_CAPACITY: f64 = 2000.0;

/// Capacidad inicial del contenedor de te (gramos)
pub const TEA_CONTAINER_CAPACITY: f64 = 2000.0;

/// Capacidad inicial del contenedor de leche (ml)
pub const MILK_CONTAINER_CAPACITY: f64 = 10000.0;

/// Capacidad inicial del contenedor de azucar (gramos)
pub const SUGAR_CONTAINER_CAPACITY: f64 = 8000.0;

/// Capacidad inicial del contenedor de agua (ml)
pub const WATER_CONTAINER_CAPACITY: f64 = 15000.0;

/// Cantidad minima que tiene que quedar en un contenedor despues de un pedido para aceptarlo.
/// Con 0 alcanza con que no quede negativo.
pub const MINIMUM_RESERVE: f64 = 0.0;

/// Porcentaje a partir del cual se va a alertar de que se acaba un contenedor
pub const LOW_STOCK_PERCENTAGE: f64 = 20.0;

/// Archivo de pedidos por defecto
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";

/// Cantidad de pedidos aleatorios a generar si no hay archivo de pedidos
pub const RANDOM_ORDERS: usize = 10;

/// Maxima cantidad de bebidas en un pedido aleatorio
pub const MAX_DRINKS_IN_RANDOM_ORDER: u64 = 5;
