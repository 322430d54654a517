#![no_std]

pub mod clock;
pub mod display_lines;
pub mod serial;
