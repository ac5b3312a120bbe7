pub mod conf;
pub mod error;
pub mod model;
pub mod resolve;
pub mod source;
