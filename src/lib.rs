//! Deterministic solicitation analysis engine for RFx documents.
//!
//! `rfx-core` turns the extracted text of a government or commercial
//! solicitation (RFB/RFP/RFQ/IFB/RFI) into a structured requirement
//! inventory, synthesizes per-requirement compliance responses with an
//! explicit escalation signal when a human must supply missing facts, and
//! derives a cost/price buildup with supporting justification schedules.
//! All operations are deterministic; identical inputs always produce
//! identical outputs.
//!
//! The surrounding application (upload, PDF extraction, model calls, UI)
//! is out of scope: this crate consumes plain text plus an
//! [`OrganizationProfile`](types::OrganizationProfile) and returns
//! structured records.

pub mod pricing;
pub mod profile_extract;
pub mod structuring;
pub mod synthesis;
pub mod types;
