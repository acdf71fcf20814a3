pub mod extensions;
pub mod loader;
pub mod thumbnail;
pub mod histogram;
pub mod pixel;

pub use extensions::*;
pub use loader::*;
pub use thumbnail::*;
pub use histogram::*;
pub use pixel::*;
