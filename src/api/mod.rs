//! Bilibili API module.
//!
//! This module provides:
//! - Recognition of video, series, live and audio addresses
//! - HTTP client for the public web API
//! - API response types and their conversion into catalogs

pub mod client;
pub mod types;
pub mod url;

pub use client::{parse_response, BiliApi, RemoteSource};
pub use self::url::{aid_to_bvid, parse_target, SeasonRef, Target};
