pub mod advisory;
pub mod crop;
pub mod weather;

pub use advisory::*;
pub use crop::*;
pub use weather::*;
