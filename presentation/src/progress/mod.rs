//! Progress reporting while a lookup is in flight

pub mod reporter;
