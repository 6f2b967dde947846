// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` provides auto-dismissing toast notifications for Iced
//! applications.
//!
//! Producers raise toasts through a shared [`Registry`](ui::notifications::Registry);
//! a [`Container`](ui::notifications::Container) mounted in the host
//! application renders them and removes each one after its duration or when
//! the user dismisses it. A small demo application lives in [`app`].

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
