#![allow(dead_code)]

pub mod logger;
pub mod scratch;
