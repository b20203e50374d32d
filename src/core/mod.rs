//! Settings, image sorting, blur scoring and run orchestration

pub mod blur;
pub mod catalog;
pub mod pipeline;
pub mod settings;
pub mod sorter;
