// Core modules implementing the optional container and its serde field helpers.
pub mod field;
pub mod maybe;
pub mod presence;
