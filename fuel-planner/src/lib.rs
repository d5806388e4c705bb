//! Fuel stop planner.
//!
//! Answers: "driving this route with this tank, which stations should I
//! stop at, and what will the fuel cost?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
