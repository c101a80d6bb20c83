pub mod fal;
pub mod storage;
pub mod telegram;
