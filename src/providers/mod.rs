mod openrouter;

pub use openrouter::{OpenRouterProvider, APP_REFERER, APP_TITLE};
