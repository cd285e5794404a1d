// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`sign_in`] - Account sign-in form
//! - [`sign_up`] - Account registration form
//! - [`reset_password`] - Password recovery form
//! - [`dashboard`] - Post-sign-in landing screen
//!
//! # Shared Infrastructure
//!
//! - [`form`] - Shared form field building blocks
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod dashboard;
pub mod design_tokens;
pub mod form;
pub mod icons;
pub mod notifications;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;
pub mod styles;
pub mod theming;
