//! Canned replies for demo mode.
//!
//! Resolution is first-match over [`DEMO_RULES`] in declaration order. An
//! utterance mentioning several topics always gets the reply of the earliest
//! rule it matches; there is deliberately no ranking.

/// Menu shown when no rule matches.
pub const DEFAULT_REPLY: &str = "您好！我是您的备孕健康顾问。我可以帮您：\n\n1. **解释医学术语** - 如AMH、TORCH、性激素六项等\n2. **推荐体检项目** - 根据您的年龄和情况\n3. **解答备孕疑问** - 检查时间、准备事项等\n4. **分析检查报告** - 帮助理解各项指标\n\n请问有什么可以帮助您的吗？";

pub const AMH_REPLY: &str = "**AMH（抗缪勒管激素）**是评估卵巢储备功能的重要指标。\n\n📊 **正常参考范围：**\n- 25-28岁：2.0-6.8 ng/ml\n- 29-32岁：1.5-4.0 ng/ml\n- 33-35岁：1.0-3.0 ng/ml\n- 36-40岁：0.5-2.0 ng/ml\n\n💡 **解读：**\n- >2.0：卵巢储备良好\n- 1.0-2.0：卵巢储备下降\n- <1.0：卵巢储备较低，建议尽快备孕\n\n⚠️ AMH低不代表不能怀孕，只是提醒要抓紧时间哦！";

pub const TORCH_REPLY: &str = "**TORCH检查**是一组可能影响胎儿的病原体筛查：\n\n🔬 **包含项目：**\n- **T**oxoplasma（弓形虫）- 猫狗宠物可能携带\n- **O**ther（其他）\n- **R**ubella（风疹病毒）\n- **C**ytomegalovirus（巨细胞病毒）\n- **H**erpes simplex（单纯疱疹病毒）\n\n⚠️ **为什么重要？**\n- 孕期感染可能导致流产、胎儿畸形\n- 建议孕前检查，如有感染先治疗再怀孕\n- 养宠物的准妈妈要特别注意弓形虫";

pub const SEX_HORMONE_REPLY: &str = "**性激素六项**评估女性内分泌功能：\n\n📋 **检查项目：**\n1. **FSH**（促卵泡激素）- 刺激卵泡发育\n2. **LH**（黄体生成素）- 促进排卵\n3. **E2**（雌二醇）- 主要雌激素\n4. **P**（孕酮）- 维持妊娠\n5. **T**（睾酮）- 雄激素水平\n6. **PRL**（泌乳素）- 过高会抑制排卵\n\n⏰ **检查时间：**月经第2-4天抽血\n\n💡 通过这六项可以了解卵巢功能、排卵情况和内分泌状态。";

pub const TIMING_REPLY: &str = "**最佳检查时间建议：**\n\n📅 **提前多久检查？**\n建议提前**3-6个月**，留出调理时间\n\n🗓️ **月经周期中什么时候去？**\n- **月经干净后3-7天**最佳\n- 避开月经期和排卵期\n- 性激素六项在月经第2-4天\n\n⏰ **一天中什么时候？**\n- 早上8-10点空腹前往\n- 前一天晚上10点后禁食\n\n🚫 **检查前避免：**\n- 性生活（前3天）\n- 剧烈运动\n- 阴道用药";

pub const PREPARATION_REPLY: &str = "**检查前准备清单：**\n\n📋 **必带物品：**\n- ✅ 身份证、医保卡\n- ✅ 既往病历和检查报告\n- ✅ 空腹前往（可带食物检查后吃）\n- ✅ 宽松舒适的衣物\n\n🍽️ **饮食注意：**\n- 前3天清淡饮食\n- 前一天晚上10点后禁食\n- 避免油腻、高蛋白、饮酒\n\n💊 **药物注意：**\n- 避免阴道用药\n- 慢性病患者药物可正常服用\n- 提前告知医生正在服用的药物\n\n👕 **着装建议：**\n- 宽松上衣（方便抽血）\n- 方便穿脱的裤子\n- 避免连体衣、连衣裙";

pub const FREE_POLICY_REPLY: &str = "**上海免费孕前检查政策：**\n\n✅ **申请条件（满足其一）：**\n- 夫妻一方为上海户籍\n- 双方外地户籍但居住证满6个月\n\n📋 **申请流程：**\n1. 到居住地居委会/街道计生办\n2. 填写《家庭档案》申请表\n3. 提交身份证、结婚证、户口本\n4. 领取《免费孕前检查通知单》\n5. 到指定医院预约检查\n\n💰 **免费项目：**\n血常规、尿常规、肝功能、肾功能、甲状腺功能、TORCH筛查、妇科B超、白带常规、男方精液分析等\n\n💡 **省钱攻略：**先申请免费检查，再自费加做AMH、性激素六项等项目，总花费可控制在2000元以内！";

pub const FOLIC_ACID_REPLY: &str = "**叶酸补充指南：**\n\n💊 **为什么要补？**\n- 预防胎儿神经管畸形\n- 降低流产风险\n- 促进胎儿正常发育\n\n📏 **剂量建议：**\n- 孕前3个月开始：0.4-0.8mg/天\n- 怀孕后前3个月继续\n- 有神经管缺陷史：需4mg/天（遵医嘱）\n\n🥬 **食物来源：**\n- 绿叶蔬菜（菠菜、油菜）\n- 豆类、坚果\n- 动物肝脏\n\n⏰ **服用时间：**\n- 建议早餐后服用\n- 每天固定时间\n- 与维生素C同服吸收更好\n\n💡 单纯食补不够，建议服用叶酸片！";

/// A keyword rule: the reply is chosen when any keyword is contained in the
/// lower-cased utterance.
#[derive(Debug, Clone, Copy)]
pub struct DemoRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl DemoRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered keyword rules. Order is precedence.
pub const DEMO_RULES: &[DemoRule] = &[
    DemoRule {
        topic: "amh",
        keywords: &["amh"],
        reply: AMH_REPLY,
    },
    DemoRule {
        topic: "torch",
        keywords: &["torch"],
        reply: TORCH_REPLY,
    },
    DemoRule {
        topic: "sex-hormone",
        keywords: &["性激素", "六项"],
        reply: SEX_HORMONE_REPLY,
    },
    DemoRule {
        topic: "timing",
        keywords: &["时间", "什么时候"],
        reply: TIMING_REPLY,
    },
    DemoRule {
        topic: "preparation",
        keywords: &["准备", "注意"],
        reply: PREPARATION_REPLY,
    },
    DemoRule {
        topic: "free-policy",
        keywords: &["免费", "政策"],
        reply: FREE_POLICY_REPLY,
    },
    DemoRule {
        topic: "folic-acid",
        keywords: &["叶酸"],
        reply: FOLIC_ACID_REPLY,
    },
];

/// Returns the first rule matching `utterance`, if any.
pub fn match_rule(utterance: &str) -> Option<&'static DemoRule> {
    let lowered = utterance.to_lowercase();
    DEMO_RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Resolves an utterance to its canned reply.
///
/// Pure: the same text always yields the same reply.
pub fn demo_reply(utterance: &str) -> &'static str {
    match_rule(utterance).map_or(DEFAULT_REPLY, |rule| rule.reply)
}
