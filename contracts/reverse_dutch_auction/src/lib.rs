#![no_std]

mod auction;
mod contract;
mod controller;
pub mod errors;
mod events;
mod msg;
mod storage;


pub use crate::contract::{ReverseDutchAuction, ReverseDutchAuctionClient};
pub use crate::storage::{AuctionState, Config, OverpaymentPolicy};
