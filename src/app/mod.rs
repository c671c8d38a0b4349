// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

pub mod backtop;
pub mod config;
mod css;
pub mod dom_page;
pub mod error;
pub mod focus;
pub mod has;
pub mod i18n;
pub mod listen;
mod macros;
pub mod main;
pub mod shed;
pub mod signature;
pub mod viewport;
