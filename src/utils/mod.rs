mod check_status;
mod create_client;
pub mod data_types;
mod stream_body;

pub use check_status::ensure_success;
pub use create_client::create_client;
pub use stream_body::body_reader;
