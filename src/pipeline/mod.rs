//! End-to-end assembly pipeline

pub mod assemble;
