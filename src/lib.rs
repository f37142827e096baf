//! Card Advisor - chat client for a payment-card buying assistant
//!
//! Lets a user pick the cards they hold, describe a purchase, and converse
//! with a remote assistant that recommends how to pay.

pub mod catalog;
pub mod client;
pub mod config;
pub mod controller;
pub mod render;
pub mod selector;
pub mod session;
pub mod state_machine;
