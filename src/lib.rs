pub mod args;
pub mod calver;
pub mod error;
pub mod token;

pub use calver::{generate, generate_at, RenderContext};
pub use error::CalverError;
pub use token::{Placeholder, Token};
