// Handlers module - presentation-facing entry points

pub mod session;

pub use session::{apply, replay, CheckoutCommand};
