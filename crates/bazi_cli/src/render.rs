//! Plain-text output for each subcommand.

use bazi_base::{
    ALL_ELEMENTS, ALL_POSITIONS, BaziChart, BaziInput, Branch, GanZhi, Gender, Locale, Stem,
};
use bazi_capability::CapabilityAssessment;
use bazi_luck::{CycleTransition, Direction, FleetingYear, LuckCycle, YearInteraction};
use bazi_relations::BaziRelations;
use ziwei_base::{SihuaKind, ZiweiChart};

fn pick<'a>(locale: Locale, zh: &'a str, en: &'a str) -> &'a str {
    match locale {
        Locale::Zh => zh,
        Locale::En => en,
    }
}

fn ganzhi(g: GanZhi, locale: Locale) -> String {
    match locale {
        Locale::Zh => g.name(),
        Locale::En => format!("{}-{}", g.stem().pinyin(), g.branch().pinyin()),
    }
}

pub fn relations(input: &BaziInput, relations: &BaziRelations, locale: Locale) {
    println!("{input}");
    if relations.is_empty() {
        println!("{}", pick(locale, "无", "none"));
        return;
    }
    let report = relations.report(locale);
    for (zh, en, lines) in report.sections() {
        if lines.is_empty() {
            continue;
        }
        println!("{}:", pick(locale, zh, en));
        for line in lines {
            println!("  {line}");
        }
    }
}

pub fn ziwei_line(branch: Branch, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("紫微在{branch}"),
        Locale::En => format!("Ziwei in {}", branch.pinyin()),
    }
}

pub fn ziwei_chart(chart: &ZiweiChart, locale: Locale) {
    println!(
        "{} {}  {} {}  {}",
        pick(locale, "命宫", "Life palace"),
        chart.life_palace.label(locale),
        pick(locale, "身宫", "Body palace"),
        chart.body_palace.label(locale),
        chart.bureau.label(locale),
    );
    println!("{}", ziwei_line(chart.ziwei, locale));
    for palace in &chart.palaces {
        let stars: Vec<String> = chart
            .stars_at(palace.branch)
            .iter()
            .map(|&s| match chart.birth_sihua_of(s) {
                Some(kind) => format!("{}[{}]", s.label(locale), sihua_mark(kind, locale)),
                None => s.label(locale).to_string(),
            })
            .collect();
        let mut marks = String::new();
        if palace.is_body_palace {
            marks.push_str(pick(locale, " [身]", " [body]"));
        }
        if palace.is_lai_yin {
            marks.push_str(pick(locale, " [来因]", " [origin]"));
        }
        let own: Vec<String> = chart
            .self_sihua
            .iter()
            .filter(|s| s.branch == palace.branch)
            .map(|s| s.code())
            .collect();
        if !own.is_empty() {
            marks.push_str(&format!(" ({})", own.join(",")));
        }
        println!(
            "{}{} {:<6} {:>7}  {}{}",
            palace.stem.label(locale),
            palace.branch.label(locale),
            palace.name.label(locale),
            palace.decade.to_string(),
            stars.join(" "),
            marks
        );
    }
    let birth: Vec<String> = chart
        .birth_sihua
        .iter()
        .map(|b| format!("{}{}", b.star.label(locale), b.kind.label(locale)))
        .collect();
    println!("{}: {}", pick(locale, "生年四化", "Birth-year sihua"), birth.join(" "));
}

fn sihua_mark(kind: SihuaKind, locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => kind.mark(),
        Locale::En => kind.label(locale),
    }
}

pub fn tiger(stem: Stem, months: &[GanZhi], locale: Locale) {
    println!(
        "{} {}",
        pick(locale, "年干", "Year stem"),
        stem.label(locale)
    );
    for (i, g) in months.iter().enumerate() {
        if months.len() == 1 {
            println!("{}", ganzhi(*g, locale));
        } else {
            println!("{:>2} {}", i + 1, ganzhi(*g, locale));
        }
    }
}

pub fn hours(stem: Stem, hours: &[GanZhi], locale: Locale) {
    println!(
        "{} {}",
        pick(locale, "日干", "Day stem"),
        stem.label(locale)
    );
    for g in hours {
        println!("{}", ganzhi(*g, locale));
    }
}

pub fn chart(chart: &BaziChart, locale: Locale) {
    for position in ALL_POSITIONS {
        let pillar = chart.pillar(position);
        let stem_god = match chart.stem_ten_god(position) {
            Some(g) => g.label(locale),
            None => pick(locale, "日主", "Day Master"),
        };
        let hidden: Vec<String> = pillar
            .hidden_stems()
            .iter()
            .map(|h| h.stem.label(locale))
            .collect();
        println!(
            "{:<6} {:<8} {:<18} {:<18} {:<20} [{}]",
            position.label(locale),
            ganzhi(pillar.ganzhi, locale),
            stem_god,
            chart.branch_ten_god(position).label(locale),
            pillar.ganzhi.nayin().label(locale),
            hidden.join(" ")
        );
    }
    let counts = chart.element_counts();
    let line: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|e| format!("{}{}", e.label(locale), counts[e.index() as usize]))
        .collect();
    println!("{}", line.join(" "));
}

pub fn luck(chart: &BaziChart, gender: Gender, cycles: &[LuckCycle], locale: Locale) {
    let direction = Direction::of(chart.year.stem(), gender);
    println!("{}", direction.label(locale));
    for c in cycles {
        println!(
            "{:>2} {:<8} {:>3}-{:<3} {}-{}  {} / {}  {}  {:>3} {}",
            c.number,
            ganzhi(c.ganzhi, locale),
            c.start_age,
            c.end_age,
            c.start_year,
            c.end_year,
            c.ten_gods.stem.label(locale),
            c.ten_gods.branch.label(locale),
            c.nayin.label(locale),
            c.strength,
            c.relationship.label(locale)
        );
    }
}

pub fn transitions(transitions: &[CycleTransition], locale: Locale) {
    for t in transitions {
        println!(
            "{:>3} {} -> {}  {}  {}",
            t.age,
            ganzhi(t.from.ganzhi, locale),
            ganzhi(t.to.ganzhi, locale),
            t.significance.label(locale),
            t.describe(locale)
        );
    }
}

pub fn fleeting(
    cycle: &LuckCycle,
    years: &[FleetingYear],
    interactions: &[YearInteraction],
    locale: Locale,
) {
    println!(
        "{} {} ({}-{})",
        pick(locale, "大运", "Luck cycle"),
        ganzhi(cycle.ganzhi, locale),
        cycle.start_year,
        cycle.end_year
    );
    for (y, i) in years.iter().zip(interactions) {
        println!(
            "{} {:<8} {:>3}  {} / {}  {:>3}  {}",
            y.year,
            ganzhi(y.ganzhi, locale),
            y.age,
            y.ten_gods.stem.label(locale),
            y.ten_gods.branch.label(locale),
            i.strength,
            i.tendency.label(locale)
        );
        println!("    {}", i.describe(locale));
        for w in i.warnings(locale) {
            println!("    {w}");
        }
    }
}

pub fn capability(a: &CapabilityAssessment, locale: Locale) {
    println!(
        "{} ({:.2})  {}",
        a.pattern.pattern.label(locale),
        a.pattern.confidence,
        a.pattern.pattern.description(locale)
    );
    for s in &a.scores {
        println!("{:<14} {:>5.1}", s.capability.label(locale), s.score);
    }
    println!(
        "{} {:.1}  {} {:.2}",
        pick(locale, "极差", "disparity"),
        a.polarization.disparity,
        pick(locale, "均衡度", "balance"),
        a.polarization.balance
    );
    let strengths: Vec<String> = a
        .strengths
        .iter()
        .filter(|&(_, v)| v > 0.0)
        .map(|(g, v)| format!("{}{:.2}", g.label(locale), v))
        .collect();
    println!("{}", strengths.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::PillarPosition;

    #[test]
    fn ganzhi_labels() {
        let g: GanZhi = "甲子".parse().unwrap();
        assert_eq!(ganzhi(g, Locale::Zh), "甲子");
        assert_eq!(ganzhi(g, Locale::En), "Jia-Zi");
    }

    #[test]
    fn ziwei_line_locales() {
        assert_eq!(ziwei_line(Branch::Chen, Locale::Zh), "紫微在辰");
        assert_eq!(ziwei_line(Branch::Chen, Locale::En), "Ziwei in Chen");
    }

    #[test]
    fn sihua_marks() {
        assert_eq!(sihua_mark(SihuaKind::Lu, Locale::Zh), "禄");
        assert_eq!(sihua_mark(SihuaKind::Ji, Locale::En), "Ji");
    }

    #[test]
    fn day_pillar_has_no_stem_god() {
        let c: BaziChart = "甲子丙寅甲午甲子".parse().unwrap();
        assert_eq!(c.stem_ten_god(PillarPosition::Day), None);
    }
}
