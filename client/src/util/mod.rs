pub mod config;
pub mod form;
pub mod guard;
pub mod media;
pub mod programs;
pub mod storage;
