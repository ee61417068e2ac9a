//! Entity Module

pub mod survey;
