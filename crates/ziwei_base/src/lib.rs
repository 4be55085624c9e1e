//! ZiWei Dou Shu placement tables.
//!
//! This crate provides:
//! - The Five-Elements Bureau (五行局) resolver
//! - The Ziwei star position table
//! - Placement of the fourteen main stars
//! - Life/body palaces, palace stems and decade ranges
//! - Four transformations (四化): birth year, self and flying
//! - Assembly of a full chart from lunar birth data

pub mod bureau;
pub mod chart;
pub mod palace;
pub mod sihua;
pub mod stars;
pub mod ziwei_position;

pub use bureau::{
    ALL_BUREAUS, FiveElementsBureau, bureau_from_number, bureau_from_symbols, five_elements_bureau,
};
pub use chart::{ZiweiBirth, ZiweiChart, build_ziwei_chart};
pub use palace::{
    ALL_PALACE_NAMES, DecadeRange, Palace, PalaceName, body_palace, decade_range, life_palace,
    month_palace, palace_layout, palace_stems,
};
pub use sihua::{
    ALL_SIHUA_KINDS, BirthSihua, FlyingSihua, SelfSihua, SelfSihuaDirection, SihuaKind, SihuaStar,
    sihua_kind, sihua_stars,
};
pub use stars::{
    ALL_MAIN_STARS, MainStar, StarPlacement, StarSeries, place_main_stars, stars_in_palace,
    tianfu_position,
};
pub use ziwei_position::{ZiweiInput, ZiweiPlacement, ziwei_position, ziwei_position_by_number};
