//! Security Mentor - Role-Personalized Security Awareness Training
//!
//! This crate implements a conversational tutor that walks employees through
//! a fixed security-awareness curriculum, answers free-form questions against
//! a policy corpus, and grades short free-text answers to embedded challenges.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
