//! Generic containers backing maze generation and solving

mod circular_array;
mod dynamic_array;
mod queue;
mod stack;

pub use circular_array::CircularArray;
pub use dynamic_array::DynamicArray;
pub use queue::Queue;
pub use stack::Stack;
