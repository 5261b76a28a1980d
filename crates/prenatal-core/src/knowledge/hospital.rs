//! Shanghai hospitals offering pre-pregnancy checkups.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Hospital category used by the hospital filter.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HospitalType {
    Specialist,
    General,
    Budget,
}

impl HospitalType {
    pub fn label(self) -> &'static str {
        match self {
            HospitalType::Specialist => "专科权威",
            HospitalType::General => "三甲综合",
            HospitalType::Budget => "经济实惠",
        }
    }

    /// Resolves a filter given either as identifier (`budget`) or label (`经济实惠`).
    pub fn parse(query: &str) -> Option<Self> {
        let query = query.trim();
        query
            .parse()
            .ok()
            .or_else(|| Self::iter().find(|kind| kind.label() == query))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hospital {
    pub name: &'static str,
    /// Common nickname or grade, e.g. `红房子`.
    pub level: &'static str,
    pub kind: HospitalType,
    pub address: &'static str,
    pub phone: Option<&'static str>,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub rating: f32,
}

pub const HOSPITALS: &[Hospital] = &[
    Hospital {
        name: "复旦大学附属妇产科医院",
        level: "红房子",
        kind: HospitalType::Specialist,
        address: "黄浦区方斜路419号 / 杨浦区沈阳路128号",
        phone: Some("021-33189900"),
        price: "¥3,000-5,000",
        features: &["全国顶尖妇产专科", "孕前门诊专业", "历史悠久"],
        rating: 4.9,
    },
    Hospital {
        name: "国际和平妇幼保健院",
        level: "国妇婴",
        kind: HospitalType::Specialist,
        address: "徐汇区衡山路910号",
        phone: Some("021-64070434"),
        price: "¥4,000-6,000",
        features: &["夫妻双人评估套餐", "孕前营养指导", "VIP服务"],
        rating: 4.8,
    },
    Hospital {
        name: "上海市第一妇婴保健院",
        level: "一妇婴",
        kind: HospitalType::Specialist,
        address: "浦东新区高科西路2699号",
        phone: Some("021-20261000"),
        price: "¥5,000左右",
        features: &["东院设备新", "孕前营养指导门诊", "预约便捷"],
        rating: 4.7,
    },
    Hospital {
        name: "仁济医院",
        level: "三甲综合",
        kind: HospitalType::General,
        address: "浦东新区北园路33号(东院)",
        phone: Some("021-58752345"),
        price: "¥4,500-5,700",
        features: &["\"仁育好孕\"套餐", "综合实力强", "多院区可选"],
        rating: 4.7,
    },
    Hospital {
        name: "瑞金医院",
        level: "三甲综合",
        kind: HospitalType::General,
        address: "黄浦区瑞金二路197号",
        phone: Some("021-64370045"),
        price: "¥5,000左右",
        features: &["综合实力强", "内分泌检查优势", "设备先进"],
        rating: 4.8,
    },
    Hospital {
        name: "曙光医院东院",
        level: "三甲综合",
        kind: HospitalType::General,
        address: "浦东新区张衡路528号",
        phone: Some("021-53821650"),
        price: "¥2,400左右",
        features: &["中西医结合调理", "性价比高", "备孕套餐实惠"],
        rating: 4.5,
    },
    Hospital {
        name: "上海市第四人民医院",
        level: "二甲",
        kind: HospitalType::Budget,
        address: "虹口区三门路1279号",
        phone: Some("021-65591800"),
        price: "¥1,500-2,000",
        features: &["备孕套餐性价比高", "基础项目齐全", "预约方便"],
        rating: 4.3,
    },
    Hospital {
        name: "各区妇幼保健所",
        level: "区级",
        kind: HospitalType::Budget,
        address: "各区均有",
        phone: None,
        price: "¥1,500-2,500",
        features: &["基础项目齐全", "可结合免费政策", "就近检查"],
        rating: 4.2,
    },
];

/// Lists hospitals of `kind` in table order; `None` lists all of them.
pub fn hospitals(kind: Option<HospitalType>) -> Vec<&'static Hospital> {
    HOSPITALS
        .iter()
        .filter(|h| kind.is_none_or(|k| h.kind == k))
        .collect()
}
