//! Hand landmark data model and finger-state classification.

pub mod finger;
pub mod landmark;
