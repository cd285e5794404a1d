// SPDX-License-Identifier: MPL-2.0
//! `gobarber_desk` is the desktop client for the GoBarber scheduling service,
//! built with the Iced GUI framework.
//!
//! It provides account sign-in, registration, and password recovery, with a
//! toast notification layer for user feedback, internationalization with
//! Fluent, and user preference management.

#![doc(html_root_url = "https://docs.rs/gobarber_desk/0.1.0")]

pub mod account;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
