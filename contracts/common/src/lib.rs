//! Shared storage helpers for the staking contract suite.
//!
//! This crate provides:
//! - [`ownable`]: single-owner gating with a two-step ownership transfer.
//! - [`pausable`]: the Active ⇄ Paused switch used by emergency paths.
//! - [`ttl`]: storage lifetime constants and extension helpers.
//!
//! Helpers return `bool` / `Option` rather than errors so that each contract
//! can map failures onto its own error codes.

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod ownable;
pub mod pausable;
pub mod ttl;
