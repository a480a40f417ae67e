/*
[INPUT]:  Framework vocabularies and WEEX schema definitions
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions shared across the connector
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use responses::*;
