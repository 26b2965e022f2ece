//! Request handlers.

pub mod canvas;
