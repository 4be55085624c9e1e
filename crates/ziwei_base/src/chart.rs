//! ZiWei chart assembly from lunar birth data.

use bazi_base::{Branch, Gender, Result, Stem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bureau::FiveElementsBureau;
use crate::palace::{Palace, body_palace, life_palace, palace_layout};
use crate::sihua::{
    BirthSihua, FlyingSihua, SelfSihua, SihuaKind, birth_sihua, flying_sihua, self_sihua,
};
use crate::stars::{MainStar, StarPlacement, place_main_stars, stars_in_palace, tianfu_position};
use crate::ziwei_position::ZiweiInput;

/// Lunar birth data, already converted by the calendar service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiweiBirth {
    pub year_stem: Stem,
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub hour_branch: Branch,
    pub gender: Gender,
}

/// Assembled ZiWei chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiweiChart {
    pub life_palace: Branch,
    pub body_palace: Branch,
    pub bureau: FiveElementsBureau,
    pub ziwei: Branch,
    pub tianfu: Branch,
    /// Palaces in branch order (子 first).
    pub palaces: [Palace; 12],
    pub stars: [StarPlacement; 14],
    /// Year-stem transformations in 禄 权 科 忌 order.
    pub birth_sihua: [BirthSihua; 4],
    /// Palace stems transforming stars in their own palace.
    pub self_sihua: Vec<SelfSihua>,
}

impl ZiweiChart {
    /// Main stars in the palace at `branch`.
    pub fn stars_at(&self, branch: Branch) -> Vec<MainStar> {
        stars_in_palace(&self.stars, branch)
    }

    pub fn palace_at(&self, branch: Branch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    /// Birth-year transformation carried by a main star, if any.
    pub fn birth_sihua_of(&self, star: MainStar) -> Option<SihuaKind> {
        self.birth_sihua
            .iter()
            .find(|b| b.star.main_star() == Some(star))
            .map(|b| b.kind)
    }

    /// Transformations the stem of the palace at `from` sends elsewhere.
    pub fn flying_sihua(&self, from: Branch) -> Vec<FlyingSihua> {
        flying_sihua(self.palace_at(from), &self.stars)
    }

    /// Palace whose decade covers `age`, if any.
    pub fn decade_palace(&self, age: u32) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.decade.contains(age))
    }
}

/// Build the chart: palaces, bureau, Ziwei and the main stars.
pub fn build_ziwei_chart(birth: &ZiweiBirth) -> Result<ZiweiChart> {
    let life = life_palace(birth.lunar_month, birth.hour_branch)?;
    let body = body_palace(birth.lunar_month, birth.hour_branch)?;
    let placement = ZiweiInput {
        year_stem: birth.year_stem,
        life_palace_branch: life,
        lunar_day: birth.lunar_day,
    }
    .resolve()?;

    let stars = place_main_stars(placement.ziwei);
    let palaces = palace_layout(birth.year_stem, birth.gender, placement.bureau, life, body);
    let birth_sihua = birth_sihua(birth.year_stem, &stars);
    let self_sihua = self_sihua(&palaces, &stars, &birth_sihua);
    debug!(
        life = %life,
        body = %body,
        bureau = %placement.bureau,
        ziwei = %placement.ziwei,
        "ziwei chart assembled"
    );
    Ok(ZiweiChart {
        life_palace: life,
        body_palace: body,
        bureau: placement.bureau,
        ziwei: placement.ziwei,
        tianfu: tianfu_position(placement.ziwei),
        palaces,
        stars,
        birth_sihua,
        self_sihua,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::BaziError;

    fn birth(month: u8, day: u8, hour: Branch) -> ZiweiBirth {
        ZiweiBirth {
            year_stem: Stem::Jia,
            lunar_month: month,
            lunar_day: day,
            hour_branch: hour,
            gender: Gender::Male,
        }
    }

    #[test]
    fn first_month_zi_hour() {
        // life 寅, 甲 year → 火六局; day 1 → 酉
        let chart = build_ziwei_chart(&birth(1, 1, Branch::Zi)).unwrap();
        assert_eq!(chart.life_palace, Branch::Yin);
        assert_eq!(chart.bureau, FiveElementsBureau::Fire6);
        assert_eq!(chart.ziwei, Branch::You);
        assert!(chart.stars_at(Branch::You).contains(&MainStar::ZiWei));
        assert_eq!(chart.palace_at(Branch::Yin).decade.start_age, 6);
        assert_eq!(chart.decade_palace(8).map(|p| p.branch), Some(Branch::Yin));
    }

    #[test]
    fn transformations_on_chart() {
        let chart = build_ziwei_chart(&birth(1, 1, Branch::Zi)).unwrap();
        // 甲 year: 廉贞 禄, 太阳 忌
        let lian = chart.stars.iter().find(|p| p.star == MainStar::LianZhen).unwrap();
        assert_eq!(chart.birth_sihua[0].branch, Some(lian.branch));
        assert_eq!(chart.birth_sihua_of(MainStar::LianZhen), Some(SihuaKind::Lu));
        assert_eq!(chart.birth_sihua_of(MainStar::TaiYang), Some(SihuaKind::Ji));
        assert_eq!(chart.birth_sihua_of(MainStar::ZiWei), None);

        for s in &chart.self_sihua {
            assert!(chart.stars_at(s.branch).contains(&s.star));
        }
        for palace in &chart.palaces {
            for f in chart.flying_sihua(palace.branch) {
                assert_ne!(f.from, f.to);
                assert!(chart.stars_at(f.to).contains(&f.star));
            }
        }
    }

    #[test]
    fn bad_inputs() {
        assert_eq!(
            build_ziwei_chart(&birth(0, 1, Branch::Zi)),
            Err(BaziError::LunarMonthOutOfRange(0))
        );
        assert_eq!(
            build_ziwei_chart(&birth(1, 31, Branch::Zi)),
            Err(BaziError::LunarDayOutOfRange(31))
        );
    }
}
