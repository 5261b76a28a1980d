//! Age bracket profiles.

use super::package::RecommendedPackage;

/// Youngest age covered by the bracket table.
pub const MIN_SUPPORTED_AGE: u32 = 25;
/// Oldest age covered by the bracket table.
pub const MAX_SUPPORTED_AGE: u32 = 40;
/// Age assumed until the user picks one.
pub const DEFAULT_USER_AGE: u32 = 29;

/// Guidance for one contiguous age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracketProfile {
    pub min: u32,
    pub max: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub focus_points: &'static [&'static str],
    pub recommended_package: RecommendedPackage,
    /// AMH reference range, display text.
    pub amh_range: &'static str,
}

impl AgeBracketProfile {
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

/// Brackets in ascending order; contiguous and non-overlapping over
/// [`MIN_SUPPORTED_AGE`, `MAX_SUPPORTED_AGE`].
pub const AGE_BRACKETS: &[AgeBracketProfile] = &[
    AgeBracketProfile {
        min: 25,
        max: 28,
        name: "25-28岁",
        title: "黄金生育期",
        description: "生育力旺盛，卵巢功能良好",
        focus_points: &["基础检查即可", "关注营养状况", "建立健康生活方式"],
        recommended_package: RecommendedPackage::Basic,
        amh_range: "2.0-6.8 ng/ml",
    },
    AgeBracketProfile {
        min: 29,
        max: 32,
        name: "29-32岁",
        title: "最佳生育期",
        description: "生育力良好，建议全面检查",
        focus_points: &["建议AMH检测", "关注甲状腺功能", "口腔检查"],
        recommended_package: RecommendedPackage::Comprehensive,
        amh_range: "1.5-4.0 ng/ml",
    },
    AgeBracketProfile {
        min: 33,
        max: 35,
        name: "33-35岁",
        title: "成熟生育期",
        description: "生育力开始下降，需重点关注",
        focus_points: &["必做AMH检测", "性激素六项", "卵巢储备评估"],
        recommended_package: RecommendedPackage::Comprehensive,
        amh_range: "1.0-3.0 ng/ml",
    },
    AgeBracketProfile {
        min: 36,
        max: 40,
        name: "36-40岁",
        title: "高龄备孕",
        description: "生育力明显下降，建议高端检查",
        focus_points: &["全面卵巢功能评估", "染色体检查", "遗传咨询"],
        recommended_package: RecommendedPackage::Premium,
        amh_range: "0.5-2.0 ng/ml",
    },
];

/// Index into [`AGE_BRACKETS`] used for ages outside the table.
const FALLBACK_BRACKET: usize = 1;

/// Returns the profile for `age`.
///
/// Ages outside the supported domain get the 29-32 profile.
pub fn age_bracket(age: u32) -> &'static AgeBracketProfile {
    AGE_BRACKETS
        .iter()
        .find(|b| b.contains(age))
        .unwrap_or(&AGE_BRACKETS[FALLBACK_BRACKET])
}

/// Clamps an age into the range the bracket table covers.
pub fn clamp_age(age: u32) -> u32 {
    age.clamp(MIN_SUPPORTED_AGE, MAX_SUPPORTED_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!((age_bracket(25).min, age_bracket(25).max), (25, 28));
        assert_eq!((age_bracket(28).min, age_bracket(28).max), (25, 28));
        assert_eq!((age_bracket(29).min, age_bracket(29).max), (29, 32));
        assert_eq!(age_bracket(35).name, "33-35岁");
        assert_eq!(age_bracket(40).recommended_package, RecommendedPackage::Premium);
    }

    #[test]
    fn test_out_of_domain_falls_back() {
        assert_eq!(age_bracket(41).name, "29-32岁");
        assert_eq!(age_bracket(18).name, "29-32岁");
        assert_eq!(age_bracket(0).name, "29-32岁");
    }

    #[test]
    fn test_brackets_are_contiguous() {
        assert_eq!(AGE_BRACKETS.first().unwrap().min, MIN_SUPPORTED_AGE);
        assert_eq!(AGE_BRACKETS.last().unwrap().max, MAX_SUPPORTED_AGE);
        for pair in AGE_BRACKETS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
        for age in MIN_SUPPORTED_AGE..=MAX_SUPPORTED_AGE {
            let hits = AGE_BRACKETS.iter().filter(|b| b.contains(age)).count();
            assert_eq!(hits, 1, "age {} must fall in exactly one bracket", age);
        }
    }

    #[test]
    fn test_clamp_age() {
        assert_eq!(clamp_age(20), 25);
        assert_eq!(clamp_age(33), 33);
        assert_eq!(clamp_age(45), 40);
    }
}
