// src/core.rs
pub mod config;
pub mod scanner;
pub mod tokenizer;
