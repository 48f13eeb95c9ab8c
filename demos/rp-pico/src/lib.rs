#![no_std]

pub mod serial;
pub mod strip;
pub mod time;
