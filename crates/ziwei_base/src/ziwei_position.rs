//! Position of the Ziwei (紫微) star.
//!
//! A fixed 30×5 table maps (lunar day, bureau) to the palace branch holding
//! Ziwei. Columns are bureaus 2..=6, rows are lunar days 1..=30.

use bazi_base::{BaziError, Branch, Result, Stem};
use serde::{Deserialize, Serialize};

use crate::bureau::{FiveElementsBureau, five_elements_bureau};

/// Ziwei branch per lunar day (row) and bureau 水二 木三 金四 土五 火六 (column).
#[rustfmt::skip]
static ZIWEI_TABLE: [[Branch; 5]; 30] = {
    use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
    [
        [Chou, Chen, Hai,  Wu,   You ], // 1
        [Yin,  Chou, Chen, Hai,  Wu  ], // 2
        [Yin,  Yin,  Chou, Chen, Hai ], // 3
        [Mao,  Si,   Yin,  Chou, Chen], // 4
        [Mao,  Yin,  Zi,   Yin,  Chou], // 5
        [Chen, Mao,  Si,   Wei,  Yin ], // 6
        [Chen, Wu,   Yin,  Zi,   Xu  ], // 7
        [Si,   Mao,  Mao,  Si,   Wei ], // 8
        [Si,   Chen, Chou, Yin,  Zi  ], // 9
        [Wu,   Wei,  Wu,   Mao,  Si  ], // 10
        [Wu,   Chen, Mao,  Shen, Yin ], // 11
        [Wei,  Si,   Chen, Chou, Mao ], // 12
        [Wei,  Shen, Yin,  Wu,   Hai ], // 13
        [Shen, Si,   Wei,  Mao,  Shen], // 14
        [Shen, Wu,   Chen, Chen, Chou], // 15
        [You,  You,  Si,   You,  Wu  ], // 16
        [You,  Wu,   Mao,  Yin,  Mao ], // 17
        [Xu,   Wei,  Shen, Wei,  Chen], // 18
        [Xu,   Xu,   Si,   Chen, Zi  ], // 19
        [Hai,  Wei,  Wu,   Si,   You ], // 20
        [Hai,  Shen, Chen, Xu,   Yin ], // 21
        [Zi,   Hai,  You,  Mao,  Wei ], // 22
        [Zi,   Shen, Wu,   Shen, Chen], // 23
        [Chou, You,  Wei,  Si,   Si  ], // 24
        [Chou, Zi,   Si,   Wu,   Chou], // 25
        [Yin,  You,  Xu,   Hai,  Xu  ], // 26
        [Yin,  Xu,   Wei,  Chen, Mao ], // 27
        [Mao,  Chou, Shen, You,  Shen], // 28
        [Mao,  Xu,   Wu,   Wu,   Si  ], // 29
        [Chen, Hai,  Hai,  Wei,  Wu  ], // 30
    ]
};

/// Ziwei branch for a bureau and lunar day; `None` outside days 1..=30.
pub fn ziwei_position(bureau: FiveElementsBureau, lunar_day: u8) -> Option<Branch> {
    if !(1..=30).contains(&lunar_day) {
        return None;
    }
    let col = (bureau.number() - 2) as usize;
    Some(ZIWEI_TABLE[(lunar_day - 1) as usize][col])
}

/// Ziwei branch for a raw bureau number; `None` outside 2..=6 or days 1..=30.
pub fn ziwei_position_by_number(bureau_number: u8, lunar_day: u8) -> Option<Branch> {
    FiveElementsBureau::from_number(bureau_number).and_then(|b| ziwei_position(b, lunar_day))
}

/// Input record for bureau and Ziwei resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiweiInput {
    pub year_stem: Stem,
    pub life_palace_branch: Branch,
    pub lunar_day: u8,
}

/// Resolved bureau and Ziwei branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiweiPlacement {
    pub bureau: FiveElementsBureau,
    pub ziwei: Branch,
}

impl ZiweiInput {
    /// Resolve bureau then Ziwei position. Fails on an out-of-range day.
    pub fn resolve(&self) -> Result<ZiweiPlacement> {
        let bureau = five_elements_bureau(self.year_stem, self.life_palace_branch);
        let ziwei = ziwei_position(bureau, self.lunar_day)
            .ok_or(BaziError::LunarDayOutOfRange(self.lunar_day))?;
        Ok(ZiweiPlacement { bureau, ziwei })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bureau::ALL_BUREAUS;

    /// Classical counting rule: pad the day up to a multiple of the bureau,
    /// count the quotient from 寅, then step back for an odd pad or forward
    /// for an even one.
    fn counted_position(bureau: u8, day: u8) -> Branch {
        let pad = (bureau - day % bureau) % bureau;
        let quotient = (day + pad) / bureau;
        let base = Branch::Yin.offset(quotient as i32 - 1);
        if pad % 2 == 1 {
            base.offset(-(pad as i32))
        } else {
            base.offset(pad as i32)
        }
    }

    #[test]
    fn table_matches_counting_rule() {
        for b in ALL_BUREAUS {
            for day in 1..=30u8 {
                assert_eq!(
                    ziwei_position(b, day),
                    Some(counted_position(b.number(), day)),
                    "bureau {b} day {day}"
                );
            }
        }
    }

    #[test]
    fn last_day_water_bureau() {
        assert_eq!(ziwei_position(FiveElementsBureau::Water2, 30), Some(Branch::Chen));
    }

    #[test]
    fn out_of_range_days() {
        for b in ALL_BUREAUS {
            assert_eq!(ziwei_position(b, 0), None);
            assert_eq!(ziwei_position(b, 31), None);
        }
    }

    #[test]
    fn raw_bureau_numbers() {
        assert_eq!(ziwei_position_by_number(2, 1), Some(Branch::Chou));
        assert_eq!(ziwei_position_by_number(6, 1), Some(Branch::You));
        assert_eq!(ziwei_position_by_number(1, 1), None);
        assert_eq!(ziwei_position_by_number(7, 15), None);
    }

    #[test]
    fn input_record() {
        let input: ZiweiInput = serde_json::from_str(
            r#"{"yearStem":"甲","lifePalaceBranch":"子","lunarDay":30}"#,
        )
        .unwrap();
        let placement = input.resolve().unwrap();
        assert_eq!(placement.bureau, FiveElementsBureau::Water2);
        assert_eq!(placement.ziwei, Branch::Chen);

        let bad = ZiweiInput {
            lunar_day: 0,
            ..input
        };
        assert_eq!(bad.resolve(), Err(BaziError::LunarDayOutOfRange(0)));
    }
}
