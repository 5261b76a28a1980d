//! Medical term glossary.

/// A glossary entry: term and its plain-language explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub term: &'static str,
    pub explanation: &'static str,
}

const fn entry(term: &'static str, explanation: &'static str) -> KnowledgeEntry {
    KnowledgeEntry { term, explanation }
}

/// Glossary in display order. Lookups that can match several entries resolve
/// to the earliest one.
pub const GLOSSARY: &[KnowledgeEntry] = &[
    entry("AMH", "抗缪勒管激素，评估卵巢储备功能的指标，数值越高说明卵子储备越充足"),
    entry("TORCH", "一组病原体的缩写，包括弓形虫、风疹病毒、巨细胞病毒、单纯疱疹病毒等，感染可能影响胎儿发育"),
    entry("TCT", "液基薄层细胞学检查，宫颈癌筛查的一种方法"),
    entry("HPV", "人乳头瘤病毒，某些高危型别与宫颈癌相关"),
    entry("性激素六项", "包括促卵泡激素(FSH)、黄体生成素(LH)、雌二醇(E2)、孕酮(P)、睾酮(T)、泌乳素(PRL)，评估内分泌功能"),
    entry("甲状腺功能", "检查甲状腺激素水平，甲状腺功能异常可能影响受孕和胎儿智力发育"),
    entry("支原体/衣原体", "性传播病原体，感染可能导致不孕或流产"),
    entry("Rh血型", "除ABO外的另一种血型系统，Rh阴性妈妈怀Rh阳性宝宝可能需要特殊处理"),
    entry("空腹血糖", "空腹状态下的血糖水平，用于筛查糖尿病"),
    entry("肝肾功能", "评估肝脏和肾脏的工作状态"),
    entry("凝血功能", "检查血液凝固能力，异常可能增加流产风险"),
    entry("染色体核型", "检查染色体数目和结构是否正常，用于排查遗传病"),
    entry("免疫抗体", "检查体内是否存在影响怀孕的自身抗体"),
    entry("阴超", "经阴道超声检查，比腹部B超更清晰观察子宫和卵巢"),
    entry("乳腺B超", "用超声波检查乳腺组织，筛查乳腺疾病"),
    entry("白带常规", "检查阴道分泌物，判断是否有炎症或感染"),
    entry("梅毒螺旋体", "梅毒病原体的检测，梅毒可通过母婴传播"),
    entry("乙肝", "乙型肝炎病毒检测，乙肝可通过母婴传播"),
    entry("卵巢储备", "卵巢中剩余卵子的数量和质量，随年龄下降"),
    entry("排卵期", "月经周期中最容易受孕的时期，通常在下次月经前14天左右"),
    entry("叶酸", "维生素B9，孕前补充可预防胎儿神经管畸形"),
];

/// Finds the glossary entry explaining `query`.
///
/// An exact (case-insensitive) term match wins; otherwise the first entry
/// whose term is contained in `query` is returned, so "AMH检测" explains AMH.
pub fn explain_term(query: &str) -> Option<&'static KnowledgeEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    GLOSSARY
        .iter()
        .find(|e| e.term.to_lowercase() == query)
        .or_else(|| {
            GLOSSARY
                .iter()
                .find(|e| query.contains(&e.term.to_lowercase()))
        })
}

/// Lists entries whose term contains `filter` (case-insensitive), in
/// glossary order. An empty filter lists everything.
pub fn search_terms(filter: &str) -> Vec<&'static KnowledgeEntry> {
    let filter = filter.trim().to_lowercase();
    GLOSSARY
        .iter()
        .filter(|e| e.term.to_lowercase().contains(&filter))
        .collect()
}
