mod cart;
mod discover;
mod notifications;
mod premium;
mod wishlist;

pub use cart::{
    Cart, CartError, CartItem, CartLine, CartView, OrderSummary, DEFAULT_SIZE,
    MAX_QUANTITY,
};
pub use discover::{DiscoverDeck, DiscoverError, DiscoverView, SwipeDirection};
pub use notifications::{Inbox, NotificationError, NotificationInbox, NotificationView};
pub use premium::{find_plan, Plan, PlanId, PremiumFeature, PLANS, PREMIUM_FEATURES};
pub use wishlist::{Wishlist, WishlistItem, WishlistSort};
