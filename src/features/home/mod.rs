pub mod dto;
pub mod handler;

pub use dto::{DEFAULT_REDIRECT_LOCATION, GREETING, HomeResponse};
pub use handler::handle_home;
