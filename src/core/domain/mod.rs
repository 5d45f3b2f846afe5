//! Domain types.

mod secret;
mod subject;
mod term;

pub use secret::Secret;
pub use subject::Subject;
pub use term::Term;
