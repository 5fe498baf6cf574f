//! Shared model and state logic for the item issue request forms.
//!
//! Everything here is free of browser APIs so the frontend and the companion
//! server agree on one data model, and the form lifecycle can be unit tested
//! natively.

pub mod catalog;
pub mod error;
pub mod form;
pub mod model;
pub mod receipt;
pub mod requests;
pub mod validate;
