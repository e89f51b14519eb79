pub mod result;
pub mod slice;
pub mod str;
