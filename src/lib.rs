#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod pair;
