//! Checkup package catalogue.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Identifier of a checkup package tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendedPackage {
    Basic,
    Comprehensive,
    Premium,
}

impl RecommendedPackage {
    /// Returns the catalogue entry for this tier.
    pub fn details(self) -> &'static CheckupPackage {
        // Catalogue holds exactly one entry per tier, in tier order.
        &PACKAGES[self as usize]
    }
}

/// A package as listed on the package page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckupPackage {
    pub id: RecommendedPackage,
    pub name: &'static str,
    pub price: &'static str,
    /// Price range in CNY, inclusive.
    pub price_range: (u32, u32),
    pub description: &'static str,
    pub recommended_for: &'static [&'static str],
}

pub const PACKAGES: &[CheckupPackage] = &[
    CheckupPackage {
        id: RecommendedPackage::Basic,
        name: "基础版",
        price: "¥1,500-2,500",
        price_range: (1500, 2500),
        description: "覆盖所有必做项目，适合身体健康、无特殊病史的年轻女性",
        recommended_for: &["25-28岁", "身体健康", "首次备孕"],
    },
    CheckupPackage {
        id: RecommendedPackage::Comprehensive,
        name: "全面版",
        price: "¥3,500-5,000",
        price_range: (3500, 5000),
        description: "必做项目 + AMH + 性激素，适合29-35岁备孕女性",
        recommended_for: &["29-35岁", "推荐选择", "全面评估"],
    },
    CheckupPackage {
        id: RecommendedPackage::Premium,
        name: "高端版",
        price: "¥6,000-8,000",
        price_range: (6000, 8000),
        description: "全面检查 + 遗传学筛查 + VIP服务，适合高龄或有特殊情况者",
        recommended_for: &["36岁以上", "高龄备孕", "特殊情况"],
    },
];
