mod dish;
mod pairing;
mod wine;

pub use dish::{Dish, DishCategory};
pub use pairing::PairingHit;
pub use wine::{Wine, WineType};
