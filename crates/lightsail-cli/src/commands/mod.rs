pub mod actions;
pub mod decode;
pub mod decode_error;
pub mod dispatch;
pub mod encode;
pub mod enums;
pub mod schema;
pub mod shared;

pub use dispatch::dispatch;
