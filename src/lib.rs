//! Savvy Advisor - Investor risk profiling and portfolio guidance.
//!
//! Scores a risk-tolerance questionnaire into one of five risk profiles and
//! maps each profile to a description and a model portfolio. Around that
//! core sit session handling, one-time passcodes, a canned chat assistant
//! and a JSON HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
