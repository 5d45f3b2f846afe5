//! Core library components.
//!
//! The record stores, their flat-file codec, configuration and storage
//! backends. Nothing in here prints to the terminal.

pub mod codec;
pub mod collection;
pub mod config;
pub mod constants;
pub mod domain;
pub mod secrets;
pub mod storage;
pub mod subjects;
pub mod types;
pub mod validation;
pub mod vault;
