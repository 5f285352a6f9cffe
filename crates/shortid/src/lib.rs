mod encode;
mod error;
mod generator;
mod rand;
mod time;

pub use crate::encode::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::rand::*;
pub use crate::time::*;
