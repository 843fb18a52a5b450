//! Intermediate Representation (IR) for markup streams.
//!
//! The conversion engine only understands a flat sequence of [`Event`]s, each
//! carrying an immutable [`Node`]. Whatever produces the stream (the html5ever
//! adapter, a test, another parser) is responsible for its shape; the engine
//! performs no validation or repair.

pub mod events;
pub mod node;

pub use events::Event;
pub use node::Node;
