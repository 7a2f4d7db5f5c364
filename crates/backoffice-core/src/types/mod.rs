//! 데이터 계층 전반에서 사용되는 값 타입.

mod date_range;
mod fund;
mod ticker;

pub use date_range::*;
pub use fund::*;
pub use ticker::*;
