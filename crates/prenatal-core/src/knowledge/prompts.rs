//! Prompts and fixed assistant texts.

/// Role definition applied by the hosted chat function. The gateway request
/// has no prompt field, so this is reference data on the client side.
pub const SYSTEM_PROMPT: &str = "你是一位专业的备孕健康顾问，擅长用通俗易懂的语言解答备孕体检相关问题。

你的职责：
1. 解释医学术语 - 用普通人能听懂的话解释专业词汇
2. 推荐体检项目 - 根据用户年龄、身体状况给出建议
3. 解答备孕疑问 - 关于体检时间、准备事项、注意事项等
4. 分析检查报告 - 帮助理解各项指标的含义

回答原则：
- 使用温暖、鼓励的语气
- 避免过于专业的术语，必要时解释
- 给出具体、可操作的建议
- 不确定时建议咨询专业医生
- 不涉及诊断和治疗方案

当前服务的是上海地区的备孕人群，可以推荐上海的医院和体检套餐。";

/// Suggested opening questions.
pub const QUICK_QUESTIONS: &[&str] = &[
    "AMH是什么？",
    "TORCH检查包括什么？",
    "性激素六项是什么？",
    "什么时候去检查最好？",
    "检查前要准备什么？",
    "免费政策怎么申请？",
    "叶酸怎么补？",
];

/// Reply when remote mode is selected but the endpoint or key is missing.
pub const REMOTE_NOT_CONFIGURED_REPLY: &str = "⚠️ 未配置远程服务，请设置 HEALTH_CHAT_ENDPOINT_URL 和 HEALTH_CHAT_ANON_KEY 环境变量，或启用演示模式。";

/// Reply when the gateway answers without any content.
pub const NOT_UNDERSTOOD_REPLY: &str = "抱歉，我没有理解您的问题。";

/// Reply when a remote call fails.
pub fn remote_failure_reply(detail: &str) -> String {
    format!("⚠️ 调用AI服务出错：{}\n\n请检查配置或切换到演示模式。", detail)
}

/// Question sent when the user asks for a detailed explanation of a term.
pub fn term_explanation_prompt(term: &str) -> String {
    format!(
        "请用通俗易懂的语言解释\"{}\"是什么，为什么备孕要检查这个指标，正常范围是多少。用中文回答。",
        term
    )
}
