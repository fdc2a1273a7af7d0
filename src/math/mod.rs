/// Injectable random source and uniform selection helpers
pub mod random;
