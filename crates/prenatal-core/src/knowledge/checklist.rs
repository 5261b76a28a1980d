//! Checkup item checklist, grouped by how strongly each item is advised.

use super::glossary::{KnowledgeEntry, explain_term};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    /// Glossary term explaining this item, if any.
    pub term: Option<&'static str>,
}

impl CheckItem {
    /// Glossary entry linked to this item.
    pub fn explanation(&self) -> Option<&'static KnowledgeEntry> {
        self.term.and_then(explain_term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [CheckItem],
}

const fn item(name: &'static str, description: &'static str, price: &'static str) -> CheckItem {
    CheckItem {
        name,
        description,
        price,
        term: None,
    }
}

const fn medical(
    name: &'static str,
    description: &'static str,
    price: &'static str,
    term: &'static str,
) -> CheckItem {
    CheckItem {
        name,
        description,
        price,
        term: Some(term),
    }
}

pub const CHECKLIST: &[CheckCategory] = &[
    CheckCategory {
        id: "required",
        name: "必做项目",
        description: "基础孕前检查，所有备孕女性都应完成",
        items: &[
            item("血常规", "贫血、感染筛查", "20-30元"),
            item("尿常规", "肾脏功能、尿路感染", "10-20元"),
            item("肝功能（大功能）", "乙肝、胆质酸等", "70-100元"),
            item("肾功能", "肌酐、尿素氮", "30-50元"),
            medical("血型（ABO+Rh）", "预防新生儿溶血", "30-50元", "Rh血型"),
            medical("空腹血糖", "糖尿病筛查", "10-20元", "空腹血糖"),
            medical("白带常规", "阴道炎症、感染", "60元左右", "白带常规"),
            medical("TCT（宫颈细胞学）", "宫颈癌筛查", "150-200元", "TCT"),
            medical("HPV检测", "人乳头瘤病毒", "300-400元", "HPV"),
            medical("妇科B超（阴超）", "子宫、卵巢状况", "100-150元", "阴超"),
            medical("支原体/衣原体", "性传播疾病筛查", "150元左右", "支原体/衣原体"),
            medical("TORCH五项", "弓形虫、风疹、巨细胞等", "200-400元", "TORCH"),
            medical("甲状腺功能（TSH）", "影响胎儿智力发育", "50-100元", "甲状腺功能"),
            medical("梅毒螺旋体", "传染病筛查", "50-80元", "梅毒螺旋体"),
            medical("乳腺B超", "乳腺健康", "100-150元", "乳腺B超"),
            item("甲状腺B超", "甲状腺结节等", "100-150元"),
            item("心电图", "心脏功能", "20-30元"),
        ],
    },
    CheckCategory {
        id: "recommended",
        name: "强烈建议",
        description: "29岁及以上备孕女性推荐加做",
        items: &[
            medical("AMH（抗缪勒管激素）", "评估卵巢储备功能", "200-300元", "AMH"),
            medical("性激素六项", "评估内分泌、排卵功能", "300元左右", "性激素六项"),
            item("口腔检查", "孕期牙病无法治疗，需提前处理", "100-300元"),
        ],
    },
    CheckCategory {
        id: "optional",
        name: "选做项目",
        description: "根据具体情况选择",
        items: &[
            item("弓形虫IgM/IgG抗体（详细）", "有宠物/养猫建议加做", "100-200元"),
            medical("染色体核型分析", "有家族遗传病史", "500-800元/人", "染色体核型"),
            item("重金属检测", "长期接触有害物质", "500-1500元"),
            medical("凝血功能", "既往不良孕产史", "300-800元", "凝血功能"),
            medical("免疫抗体检查", "既往不良孕产史", "300-800元", "免疫抗体"),
            item("精液常规分析（男方）", "男方必做检查", "100-200元"),
        ],
    },
];

/// Finds a category by identifier (`required`) or display name (`必做项目`).
pub fn checklist_category(query: &str) -> Option<&'static CheckCategory> {
    let query = query.trim();
    CHECKLIST
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(query) || c.name == query)
}
