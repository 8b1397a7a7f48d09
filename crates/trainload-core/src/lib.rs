// ABOUTME: Core types and constants for the trainload training-load engine
// ABOUTME: Foundation crate with error handling, domain constants and workout/alert models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload Core
//!
//! Foundation crate providing shared types and constants for the trainload
//! engine. It holds no computation and no logging, so it changes rarely and
//! keeps incremental builds of the engine crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Time constants and evaluation windows shared across the engine
//! - **models**: Workout samples, load state and alert types exchanged with callers

/// Unified error handling with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Plain data models consumed and produced by the engine
pub mod models;
