// Re-export all model types
pub use self::cart::*;
pub use self::enums::*;
pub use self::errors::*;
pub use self::menu_item::*;

mod cart;
mod enums;
mod errors;
mod menu_item;
