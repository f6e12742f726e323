mod favorite;
mod restaurant;
mod review;

pub use favorite::{FavoriteAction, FavoriteRequest};
pub use restaurant::{RestaurantQuery, RestaurantSummary};
pub use review::{CreateReview, Review, ReviewQuery};
