pub mod application;
pub mod document;
pub mod school;
