pub mod constants;
pub mod cursor;
pub mod particles;
pub mod theme;

pub use constants::*;
pub use cursor::*;
pub use particles::*;
pub use theme::*;
