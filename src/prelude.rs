pub use crate::cube::sequence::*;
pub use crate::cube::*;
pub use crate::face::*;
pub use crate::r#move::*;
pub use crate::solver::*;
pub use crate::sticker::*;

#[cfg(test)]
pub use crate::test::*;
