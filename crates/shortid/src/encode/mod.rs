mod base58;
mod base64;

pub use self::base58::*;
pub use self::base64::*;
