mod client;
mod restaurant;
mod session;

pub use client::{Client, ClientPublic, CreateClient};
pub use restaurant::{CreateRestaurant, Restaurant, RestaurantPublic};
pub use session::{Session, SessionKind};
