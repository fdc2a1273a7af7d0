/// Bitset of patterns still possible at a cell
pub mod bitset;
/// Region connection by corridor carving
pub mod connectivity;
/// Generation pipeline orchestration
pub mod executor;
/// Arc-consistency propagation after a cell is fixed
pub mod propagation;
/// Dead-end removal
pub mod pruning;
/// Room carving before constraint solving
pub mod rooms;
/// Minimum-entropy cell selection and collapse
pub mod selection;
