pub mod processor;
pub mod registry;
pub mod storage;
