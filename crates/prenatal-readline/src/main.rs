mod helper;

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::history::DefaultHistory;
use tracing_subscriber::EnvFilter;

use prenatal_application::ConversationService;
use prenatal_core::conversation::MessageRole;
use prenatal_core::knowledge::age::{MAX_SUPPORTED_AGE, MIN_SUPPORTED_AGE, clamp_age};
use prenatal_core::knowledge::prompts::QUICK_QUESTIONS;
use prenatal_core::knowledge::{
    CHECKLIST, HospitalType, age_bracket, checklist_category, explain_term, hospitals,
    search_terms,
};
use prenatal_core::session::{InMemorySessionStore, SessionIdentityProvider, SessionStore};
use prenatal_infrastructure::{AssistantPaths, ConfigService, FileSessionStore};

use crate::helper::CliHelper;

/// Outcome of one REPL line.
enum Flow {
    Continue,
    Quit,
}

fn print_reply(content: &str) {
    for line in content.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

fn print_quick_questions() {
    println!("{}", "常见问题（输入 /quick N 直接提问）：".bright_yellow());
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        println!("  {}", format!("{}. {}", i + 1, question).yellow());
    }
    println!();
}

fn print_help() {
    let lines = [
        "/age N        设置年龄并查看对应检查重点",
        "/term X       查看术语解释",
        "/terms [X]    列出术语（可按关键字过滤）",
        "/ask X        让顾问解释术语",
        "/quick [N]    查看或发送常见问题",
        "/hospitals [类型]  列出医院（specialist / general / budget）",
        "/checklist [分类]  查看检查项目（required / recommended / optional）",
        "/history      查看对话记录",
        "/reset        清空对话",
        "/mode         查看当前模式",
        "/quit         退出",
    ];
    for line in lines {
        println!("{}", line.bright_black());
    }
}

fn open_session_store(paths: &AssistantPaths) -> Arc<dyn SessionStore> {
    match FileSessionStore::new_default(paths) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Session file unavailable, using in-memory store: {}", e);
            Arc::new(InMemorySessionStore::new())
        }
    }
}

async fn send(service: &ConversationService, text: &str) {
    println!("{}", "思考中...".bright_black());
    if let Some(reply) = service.send_message(text).await {
        print_reply(&reply.content);
    }
}

async fn set_age(service: &ConversationService, arg: &str) {
    let Ok(age) = arg.parse::<u32>() else {
        println!("{}", "用法：/age 30".red());
        return;
    };
    if !(MIN_SUPPORTED_AGE..=MAX_SUPPORTED_AGE).contains(&age) {
        println!(
            "{}",
            format!(
                "提示：年龄范围为 {}-{} 岁，已按 {} 岁处理",
                MIN_SUPPORTED_AGE,
                MAX_SUPPORTED_AGE,
                clamp_age(age)
            )
            .yellow()
        );
    }
    let age = clamp_age(age);
    service.set_user_age(age).await;

    let profile = age_bracket(age);
    let package = profile.recommended_package.details();
    println!("{}", format!("{} · {}", profile.name, profile.title).bright_magenta().bold());
    println!("{}", profile.description);
    for point in profile.focus_points {
        println!("  {}", format!("- {}", point).yellow());
    }
    println!("AMH 参考范围：{}", profile.amh_range);
    println!(
        "{}",
        format!("推荐套餐：{}（{}）", package.name, package.price).green()
    );
    println!();
}

fn list_hospitals(arg: &str) {
    let kind = match arg {
        "" | "all" | "全部医院" => None,
        other => match HospitalType::parse(other) {
            Some(kind) => Some(kind),
            None => {
                println!("{}", "类型：specialist / general / budget".red());
                return;
            }
        },
    };

    for hospital in hospitals(kind) {
        println!(
            "{} {}",
            hospital.name.bright_magenta().bold(),
            format!("[{} · {} · {:.1}]", hospital.level, hospital.kind.label(), hospital.rating)
                .bright_black()
        );
        println!("  {} {}", hospital.address, hospital.phone.unwrap_or(""));
        println!(
            "  {}",
            format!("{} | {}", hospital.price, hospital.features.join("、")).yellow()
        );
    }
    println!();
}

fn show_checklist(arg: &str) {
    let categories: Vec<_> = if arg.is_empty() {
        CHECKLIST.iter().collect()
    } else {
        match checklist_category(arg) {
            Some(category) => vec![category],
            None => {
                println!("{}", "分类：required / recommended / optional".red());
                return;
            }
        }
    };

    for category in categories {
        println!(
            "{} {}",
            category.name.bright_magenta().bold(),
            category.description.bright_black()
        );
        for item in category.items {
            let marker = if item.term.is_some() { "ⓘ" } else { " " };
            println!(
                "  {} {}（{}） {}",
                marker.cyan(),
                item.name,
                item.description,
                item.price.yellow()
            );
        }
        println!();
    }
}

async fn handle_command(service: &ConversationService, line: &str) -> Flow {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "/quit" | "/exit" => return Flow::Quit,
        "/help" => print_help(),
        "/age" => set_age(service, arg).await,
        "/term" => match explain_term(arg) {
            Some(entry) => {
                println!("{}", entry.term.bright_magenta().bold());
                print_reply(entry.explanation);
            }
            None => println!("{}", format!("未找到术语：{}", arg).bright_black()),
        },
        "/terms" => {
            for entry in search_terms(arg) {
                println!("  {}", entry.term.cyan());
            }
        }
        "/ask" => {
            if arg.is_empty() {
                println!("{}", "用法：/ask AMH".red());
            } else {
                println!("{}", "思考中...".bright_black());
                if let Some(answer) = service.ask_term(arg).await {
                    print_reply(&answer);
                }
            }
        }
        "/quick" => {
            if arg.is_empty() {
                print_quick_questions();
            } else {
                match arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                    Some(index) if index < QUICK_QUESTIONS.len() => {
                        let question = QUICK_QUESTIONS[index];
                        println!("{}", format!("> {}", question).green());
                        send(service, question).await;
                    }
                    _ => println!(
                        "{}",
                        format!("请输入 1-{}", QUICK_QUESTIONS.len()).red()
                    ),
                }
            }
        }
        "/hospitals" => list_hospitals(arg),
        "/checklist" => show_checklist(arg),
        "/history" => {
            for message in service.history().await {
                match message.role {
                    MessageRole::User => println!("{}", format!("> {}", message.content).green()),
                    _ => print_reply(&message.content),
                }
            }
        }
        "/reset" => {
            service.reset().await;
            println!("{}", "对话已清空".bright_green());
        }
        "/mode" => {
            let config = service.config().await;
            println!(
                "{}",
                format!(
                    "模式：{}（年龄 {}，远程服务{}）",
                    config.mode,
                    service.user_age().await,
                    if config.gateway.is_some() { "已配置" } else { "未配置" }
                )
                .bright_black()
            );
        }
        _ => println!("{}", "Unknown command".bright_black()),
    }
    Flow::Continue
}

/// Interactive prenatal checkup assistant.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ===== Backend Initialization =====
    let paths = AssistantPaths::new(None);
    let config = ConfigService::new(&paths).load();
    let identity = SessionIdentityProvider::new(open_session_store(&paths));
    let service = ConversationService::new(config, identity);

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== 备孕体检助手 ===".bright_magenta().bold());
    let mode = if service.is_demo_mode().await { "演示模式" } else { "在线模式" };
    println!("{}", format!("{}，输入 /help 查看命令，/quit 退出。", mode).bright_black());
    println!();
    print_quick_questions();

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if trimmed.starts_with('/') {
                    if let Flow::Quit = handle_command(&service, trimmed).await {
                        println!("{}", "再见！".bright_green());
                        break;
                    }
                } else {
                    send(&service, trimmed).await;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
