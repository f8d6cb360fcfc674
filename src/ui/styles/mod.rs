// SPDX-License-Identifier: MPL-2.0
//! Styles centralisés pour tous les composants UI.

pub mod button;
pub mod container;

// Re-exports pour backward compatibility
pub use button::{primary as button_primary, secondary as button_secondary};
