//! Calendrical building blocks for BaZi charts.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, five elements and polarity
//! - Hidden stems per branch
//! - The sexagenary (六十甲子) cycle and its NaYin (纳音) sounds
//! - Ten God classification relative to a day master
//! - Five-Tiger-Dun month stems and Five-Rat-Dun hour stems
//! - Pillars, the 8-character input record and the assembled chart
//! - Gender and the forward/backward progression rule
//!
//! Everything here is pure table lookup and modular arithmetic. Raw symbols
//! are parsed into typed values at the boundary; typed lookups are total.

pub mod branch;
pub mod element;
pub mod error;
pub mod five_tiger;
pub mod ganzhi;
pub mod gender;
pub mod hidden_stems;
pub mod locale;
pub mod nayin;
pub mod pillar;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch, MONTH_ORDER};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::{BaziError, Result};
pub use five_tiger::{hour_pillar, month_pillar, month_stem, rat_seed, tiger_seed};
pub use ganzhi::{GANZHI_EPOCH_YEAR, GanZhi};
pub use gender::Gender;
pub use hidden_stems::{HiddenStem, HiddenStemRole, hidden_stems, primary_hidden_stem};
pub use locale::Locale;
pub use nayin::{ALL_NAYIN, NaYin};
pub use pillar::{ALL_POSITIONS, BaziChart, BaziInput, Pillar, PillarPosition};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, TenGodGroup, branch_ten_god, ten_god};
