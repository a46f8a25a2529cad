//! Mergington High School activities API.
//!
//! Students list the extracurricular catalog, sign up for an activity, and
//! drop out again. Everything lives in memory for the life of the process.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;
