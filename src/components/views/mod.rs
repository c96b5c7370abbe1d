mod contact;
mod radar;
mod timeline;

pub use contact::*;
pub use radar::*;
pub use timeline::*;
