pub mod accept_offer;
pub mod cancel_offer;
pub mod create_offer;
pub mod initialize_user;

pub use accept_offer::*;
pub use cancel_offer::*;
pub use create_offer::*;
pub use initialize_user::*;
