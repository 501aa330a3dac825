//! `jobboard-api` — HTTP surface for the job postings service.

pub mod app;
pub mod config;
