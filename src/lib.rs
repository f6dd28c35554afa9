//! FT5206/FT6x36 Rust Driver
//!
//! `no_std` driver for the FocalTech FT5206 family of capacitive touch
//! controllers (FT5206, FT6206, FT6236, FT6236U) over I2C. Exposes typed
//! queries for touch points, gestures, power mode and identification
//! registers, with an optional async API behind the `async` feature.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use driver::Ft5206;
pub use error::Error;
pub use registers::DEFAULT_I2C_ADDRESS;
