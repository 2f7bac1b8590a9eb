//! Core domain types: the category value object, keyword rules, and errors

pub mod category;
pub mod error;
pub mod keywords;
