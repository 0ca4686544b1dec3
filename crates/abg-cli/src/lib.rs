//! # abg-cli
//!
//! Command line front end for arterial blood gas interpretation.
//!
//! This crate plays the role of the form layer around
//! [`abg_interpreter`]: it collects raw field text, keeps a draft of it
//! between runs, validates it, invokes the interpreter, and renders the
//! result as a text report or JSON.

#![warn(missing_docs)]

mod app;
mod cli;
mod draft;

pub use app::{App, AppError};
pub use cli::{BatchArgs, Cli, Command, DraftAction, InterpretArgs};
pub use draft::{DraftStore, DRAFT_KEY};
