//! Pageforge TUI — the terminal editor for a page of content sections.
//!
//! This crate owns all terminal concerns: the application state machine,
//! inline field editing, section rendering, theming, and the event loop.
//! Business logic (store operations, persistence) lives in
//! `pageforge-core`; this crate only decides what to show and which
//! operation a keypress drives.
//!
//! # Modules
//!
//! - [`app`] — mode/state machine and key routing
//! - [`editor`] — inline draft/commit/cancel editing, image resolution
//! - [`input`] — line editing for drafts
//! - [`section_view`] — per-layout section rendering
//! - [`views`] — string rendering for non-interactive output
//! - [`notification`] — transient banners
//! - [`theme`] — color theme configuration
//! - [`tui`] — terminal setup and the event loop

pub mod app;
pub mod editor;
pub mod input;
pub mod notification;
pub mod section_view;
pub mod theme;
pub mod tui;
pub mod views;
