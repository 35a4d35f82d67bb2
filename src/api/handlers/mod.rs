//! HTTP request handlers.

pub mod health;
pub mod home;
pub mod strings;

pub use health::health_handler;
pub use home::home_handler;
pub use strings::{
    create_string_handler, delete_string_handler, filter_natural_language_handler,
    get_string_handler, list_strings_handler,
};
