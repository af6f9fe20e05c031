mod containment;
pub use containment::*;
