pub mod diagnostic;
pub mod token;
pub mod vocab;

pub use diagnostic::*;
pub use token::*;
pub use vocab::*;
