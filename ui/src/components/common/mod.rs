//! Common/Shared UI Components

mod icons;

pub use icons::*;
