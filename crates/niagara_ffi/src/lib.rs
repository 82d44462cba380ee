//! Flutter-facing bindings for the Niagara guide core.

pub mod api;
