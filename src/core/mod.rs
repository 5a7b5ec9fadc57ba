//! Pure logic shared with host-side tests: particle fields, the loading gate,
//! theme palettes and the delivery payload. Nothing in here touches web-sys,
//! so the integration tests compile these modules directly on the host.

pub mod contact;
pub mod field;
pub mod loader;
pub mod theme;

pub use contact::*;
pub use field::*;
pub use loader::*;
pub use theme::*;
