// UI Components
// This module contains all reusable UI components

pub mod copy_target;

pub use copy_target::CopyTarget;
