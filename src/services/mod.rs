pub mod wishlist;

pub use wishlist::{WishlistClient, WishlistError};
