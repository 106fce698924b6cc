//! Request body shapes.

pub mod request;
