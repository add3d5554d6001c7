//! Rendering dates and times as text.

mod iso;
mod rfc;

pub use self::iso::{ISO, ISOString};
