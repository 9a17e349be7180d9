// Public library interface for filescape.
// The debug CLI tools use the same modules as the main binary.

pub mod geometry;
pub mod layout;
pub mod scanner;
pub mod tree;
