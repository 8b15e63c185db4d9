//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Questionnaire, answers and risk classification
//! - `portfolio` - Profile descriptions, model allocations, dashboard view
//! - `assistant` - Chat messages and the canned assistant
//! - `session` - The signed-in user's context
//! - `otp` - One-time passcode rules

pub mod assessment;
pub mod assistant;
pub mod foundation;
pub mod otp;
pub mod portfolio;
pub mod session;
