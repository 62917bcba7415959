pub mod dto;
pub mod error;
pub mod filter;
pub mod level;
pub mod request;

pub use dto::*;
pub use error::*;
pub use filter::*;
pub use level::*;
pub use request::*;
