//! Client for a local meme generation service.
//!
//! A [`controller::GenerationTrigger`] reads a topic and optional overlay texts
//! from a [`display::DisplaySurface`], posts them to the service and renders the
//! caption and image it gets back. An [`export::ImageExporter`] saves whatever
//! image is displayed.

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(warnings)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod controller;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
