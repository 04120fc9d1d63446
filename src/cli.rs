use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use crate::api::{self, Client};
use crate::render::format::{
    format_date, format_datetime, format_seconds, format_size, parse_date_arg,
};
use crate::render::{page_window, PageSlot, Painter, Table};
use crate::settings::{self, ImageMode, Settings};
use crate::theme;
use crate::types::{
    check_config_payload, ArticleFilter, DateRange, DownloadLogFilter, Rule, Task, TaskLogFilter,
};

#[derive(Debug, Parser)]
#[command(
    name = "magpie",
    version,
    about = "Terminal admin console for a Magpie content-aggregation server"
)]
pub struct Cli {
    /// Settings file to use instead of the per-user default.
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,
    /// Server base URL, overriding the settings file.
    #[arg(long, global = true, env = "MAGPIE_SERVER", value_name = "URL")]
    pub server: Option<String>,
    /// API key, overriding the settings file.
    #[arg(long, global = true, env = "MAGPIE_API_KEY", value_name = "KEY")]
    pub api_key: Option<String>,
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the account's API key in the settings file.
    Login {
        #[arg(short, long)]
        username: String,
        /// Password; prefer MAGPIE_PASSWORD over shell history.
        #[arg(short, long, env = "MAGPIE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show per-section article counts.
    Status,
    /// Browse and push catalogued articles.
    #[command(subcommand)]
    Articles(ArticlesCmd),
    /// Manage auto-download rules.
    #[command(subcommand)]
    Rules(RulesCmd),
    /// Manage scheduled tasks and their run history.
    #[command(subcommand)]
    Tasks(TasksCmd),
    /// Manage API keys accepted by the server.
    #[command(subcommand)]
    Tokens(TokensCmd),
    /// Page through the download history.
    Downloads(DownloadsArgs),
    /// Read and write server-side config values.
    #[command(subcommand)]
    Config(ConfigCmd),
    /// Create accounts or change passwords.
    #[command(subcommand)]
    User(UserCmd),
    /// Inspect the built-in color themes.
    #[command(subcommand)]
    Theme(ThemeCmd),
    /// Show or change persisted console preferences.
    Prefs(PrefsArgs),
}

#[derive(Debug, Subcommand)]
pub enum ArticlesCmd {
    /// Search the catalogue.
    List(ArticleListArgs),
    /// Push articles to a downloader.
    Push(PushArgs),
    /// Upload a spreadsheet of articles.
    Import {
        /// Path to a .xls, .xlsx or .csv file.
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ArticleListArgs {
    /// Title keyword.
    #[arg(short, long, default_value = "")]
    pub keyword: String,
    #[arg(long, default_value = "")]
    pub website: String,
    #[arg(short, long, default_value = "")]
    pub section: String,
    #[arg(short, long, default_value = "")]
    pub category: String,
    /// Only articles published on or after this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,
    /// Only articles published on or before this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
    #[arg(long, default_value_t = 30)]
    pub page_size: u64,
    /// Preview handling for this listing, overriding the saved preference.
    #[arg(long, value_enum)]
    pub images: Option<ImageMode>,
}

#[derive(Debug, Args)]
pub struct PushArgs {
    /// Article tids to push.
    #[arg(required = true, value_name = "TID")]
    pub tids: Vec<u64>,
    /// Downloader id for a manual push.
    #[arg(long, requires = "save_path")]
    pub downloader: Option<String>,
    /// Destination directory for a manual push.
    #[arg(long, requires = "downloader")]
    pub save_path: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum RulesCmd {
    List,
    Add(RuleArgs),
    /// Replace a rule by id.
    Update {
        #[arg(long)]
        id: u64,
        #[command(flatten)]
        rule: RuleArgs,
    },
    Rm {
        id: u64,
    },
}

#[derive(Debug, Args)]
pub struct RuleArgs {
    #[arg(long)]
    pub section: String,
    #[arg(long)]
    pub category: String,
    /// Optional title regex; empty matches everything.
    #[arg(long, default_value = "")]
    pub regex: String,
    #[arg(long)]
    pub downloader: String,
    #[arg(long)]
    pub save_path: String,
}

#[derive(Debug, Subcommand)]
pub enum TasksCmd {
    List,
    /// List callables tasks can schedule.
    Funcs,
    Add(TaskArgs),
    /// Replace a task by id.
    Update {
        #[arg(long)]
        id: u64,
        #[command(flatten)]
        task: TaskArgs,
    },
    Rm {
        id: u64,
    },
    /// Fire a task immediately.
    Run {
        id: u64,
    },
    /// Page through task execution logs.
    Log(TaskLogArgs),
}

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[arg(long)]
    pub name: String,
    /// Scheduler callable; see `tasks funcs`.
    #[arg(long)]
    pub func: String,
    #[arg(long, default_value = "")]
    pub args: String,
    /// Five-field cron expression.
    #[arg(long)]
    pub cron: String,
    /// Create the task disabled.
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Debug, Args)]
pub struct TaskLogArgs {
    /// Filter by callable name.
    #[arg(long, default_value = "")]
    pub func: String,
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
    #[arg(long, default_value_t = 20)]
    pub page_size: u64,
}

#[derive(Debug, Subcommand)]
pub enum TokensCmd {
    List,
    /// Register a key, generating a random one when omitted.
    Add {
        key: Option<String>,
    },
    Rm {
        id: u64,
    },
}

#[derive(Debug, Args)]
pub struct DownloadsArgs {
    #[arg(long, default_value = "")]
    pub downloader: String,
    #[arg(long, default_value = "")]
    pub save_path: String,
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
    #[arg(long, default_value_t = 20)]
    pub page_size: u64,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Print one stored value as JSON.
    Get {
        key: String,
    },
    /// Store a JSON value under a key.
    Set {
        key: String,
        /// Inline JSON payload.
        #[arg(long, value_name = "JSON", conflicts_with = "file", required_unless_present = "file")]
        json: Option<String>,
        /// Read the JSON payload from a file.
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// List downloaders and their save paths.
    Downloaders,
}

#[derive(Debug, Subcommand)]
pub enum UserCmd {
    /// Create an account.
    Create {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "MAGPIE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Change an account's password.
    Passwd {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "MAGPIE_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ThemeCmd {
    /// List built-in themes.
    List,
    /// Print a theme's roles with their OKLCH and hex values.
    Show {
        name: Option<String>,
    },
    /// Make a theme the saved default.
    Use {
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct PrefsArgs {
    /// Switch the saved theme.
    #[arg(long)]
    pub theme: Option<String>,
    /// Switch how preview images render in listings.
    #[arg(long, value_enum)]
    pub images: Option<ImageMode>,
    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings_path = match &cli.settings {
        Some(path) => path.clone(),
        None => settings::default_path()?,
    };
    let mut saved = settings::load(&settings_path)?;

    // Flag and env overrides apply to this invocation without being written
    // back; only `login`, `theme use` and `prefs` persist anything.
    let mut effective = saved.clone();
    if let Some(server) = &cli.server {
        effective.server_url = server.trim_end_matches('/').to_string();
    }
    if let Some(key) = &cli.api_key {
        effective.api_key = key.clone();
    }

    let resolved = theme::theme_by_name(&effective.theme).resolve()?;
    let painter = if cli.no_color {
        Painter::new(resolved, false)
    } else {
        Painter::auto(resolved)
    };
    let client = Client::new(
        &effective.server_url,
        &effective.api_key,
        Duration::from_secs(effective.timeout_secs.max(1)),
    );

    match cli.command {
        Command::Login { username, password } => {
            saved.server_url = effective.server_url.clone();
            login(&client, &painter, &mut saved, &settings_path, &username, &password)
        }
        Command::Status => status(&client, &painter),
        Command::Articles(ArticlesCmd::List(args)) => {
            list_articles(&client, &painter, &effective, args)
        }
        Command::Articles(ArticlesCmd::Push(args)) => push_articles(&client, &painter, &args),
        Command::Articles(ArticlesCmd::Import { file }) => import_articles(&client, &file),
        Command::Rules(cmd) => rules(&client, cmd),
        Command::Tasks(cmd) => tasks(&client, &painter, cmd),
        Command::Tokens(cmd) => tokens(&client, &painter, cmd),
        Command::Downloads(args) => downloads(&client, &painter, &args),
        Command::Config(cmd) => config(&client, cmd),
        Command::User(cmd) => user(&client, cmd),
        Command::Theme(cmd) => theme_cmd(&painter, &mut saved, &settings_path, cmd),
        Command::Prefs(args) => prefs(&mut saved, &settings_path, &args),
    }
}

fn login(
    client: &Client,
    painter: &Painter,
    saved: &mut Settings,
    path: &Path,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let user = client.login(username, password).context("login failed")?;
    if user.api_key.is_empty() {
        bail!("server accepted the login but returned no api key");
    }
    saved.api_key = user.api_key;
    settings::save(saved, path)?;
    println!("signed in as {}", painter.bold(&user.username));
    println!("api key saved to {}", path.display());
    Ok(())
}

fn status(client: &Client, painter: &Painter) -> anyhow::Result<()> {
    let sections = client
        .sections()
        .with_context(|| format!("cannot reach {}", client.base_url()))?;
    let mut table = Table::new(["section", "articles", "categories"]);
    let mut total = 0u64;
    for section in &sections {
        total += section.count;
        table.row([
            section.name.clone(),
            section.count.to_string(),
            section.categories.join(", "),
        ]);
    }
    print!("{table}");
    println!(
        "{} sections, {} articles at {}",
        sections.len(),
        painter.bold(&total.to_string()),
        client.base_url()
    );
    Ok(())
}

fn list_articles(
    client: &Client,
    painter: &Painter,
    effective: &Settings,
    args: ArticleListArgs,
) -> anyhow::Result<()> {
    let mut date_range = DateRange::default();
    if let Some(from) = &args.from {
        date_range.from = parse_date_arg(from).context("--from must be YYYY-MM-DD")?;
    }
    if let Some(to) = &args.to {
        date_range.to = parse_date_arg(to).context("--to must be YYYY-MM-DD")?;
    }
    let filter = ArticleFilter {
        page: args.page.max(1),
        page_size: args.page_size.max(1),
        keyword: args.keyword,
        website: args.website,
        section: args.section,
        category: args.category,
        date_range,
    };
    let result = client.search_articles(&filter)?;

    let mode = args.images.unwrap_or(effective.image_mode);
    let mut headers = vec![
        "tid",
        "website",
        "section",
        "category",
        "title",
        "size",
        "published",
        "stock",
    ];
    if mode != ImageMode::Hide {
        headers.push("previews");
    }
    let mut table = Table::new(headers);
    for article in &result.items {
        let mut row = vec![
            article.tid.to_string(),
            article.website.clone(),
            article.section.clone(),
            article.category.clone(),
            article.title.clone(),
            format_size(article.size),
            format_date(&article.publish_date),
            if article.in_stock { "yes".into() } else { String::new() },
        ];
        if mode != ImageMode::Hide {
            row.push(preview_cell(
                &article.preview_urls(),
                mode == ImageMode::Blur,
            ));
        }
        table.row(row);
    }
    print!("{table}");
    print_page_footer(painter, filter.page, filter.page_size, result.total);
    Ok(())
}

/// First preview URL plus a count of the rest; blur mode masks the URL but
/// keeps the count.
fn preview_cell(urls: &[&str], blur: bool) -> String {
    let Some(first) = urls.first() else {
        return String::new();
    };
    let shown = if blur {
        "▒".repeat(12)
    } else {
        (*first).to_string()
    };
    if urls.len() > 1 {
        format!("{shown} (+{})", urls.len() - 1)
    } else {
        shown
    }
}

fn print_page_footer(painter: &Painter, page: u64, page_size: u64, total: u64) {
    let pages = total.div_ceil(page_size.max(1));
    if pages <= 1 {
        println!("{total} items");
        return;
    }
    let window: Vec<String> = page_window(page.min(pages), pages)
        .into_iter()
        .map(|slot| match slot {
            PageSlot::Page(n) if n == page => painter.accent(&format!("[{n}]")),
            PageSlot::Page(n) => n.to_string(),
            PageSlot::Gap => "…".to_string(),
        })
        .collect();
    println!("{total} items   pages: {}", window.join(" "));
}

fn push_articles(client: &Client, painter: &Painter, args: &PushArgs) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for tid in &args.tids {
        let outcome = match (&args.downloader, &args.save_path) {
            (Some(downloader), Some(save_path)) => {
                client.push_article_to(*tid, downloader, save_path)
            }
            _ => client.push_article(*tid),
        };
        match outcome {
            Ok(message) => println!("{tid}: {message}"),
            Err(err) => {
                failed += 1;
                eprintln!("{tid}: {}", painter.destructive(&err.to_string()));
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} pushes failed", args.tids.len());
    }
    Ok(())
}

fn import_articles(client: &Client, file: &Path) -> anyhow::Result<()> {
    let extension = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !matches!(extension.as_str(), "xls" | "xlsx" | "csv") {
        bail!("server accepts .xls, .xlsx or .csv spreadsheets");
    }
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("articles.xlsx");
    let bytes = fs::read(file).with_context(|| format!("cannot read {}", file.display()))?;
    let message = client.import_articles(filename, &bytes)?;
    println!("{message}");
    Ok(())
}

fn rules(client: &Client, cmd: RulesCmd) -> anyhow::Result<()> {
    match cmd {
        RulesCmd::List => {
            let rules = client.list_rules()?;
            let mut table = Table::new(["id", "section", "category", "regex", "downloader", "save path"]);
            for rule in &rules {
                table.row([
                    rule.id.to_string(),
                    rule.section.clone(),
                    rule.category.clone(),
                    rule.regex.clone(),
                    rule.downloader.clone(),
                    rule.save_path.clone(),
                ]);
            }
            print!("{table}");
        }
        RulesCmd::Add(args) => println!("{}", client.add_rule(&args.into_rule(0))?),
        RulesCmd::Update { id, rule } => println!("{}", client.update_rule(&rule.into_rule(id))?),
        RulesCmd::Rm { id } => println!("{}", client.delete_rule(id)?),
    }
    Ok(())
}

impl RuleArgs {
    fn into_rule(self, id: u64) -> Rule {
        Rule {
            id,
            section: self.section,
            category: self.category,
            regex: self.regex,
            downloader: self.downloader,
            save_path: self.save_path,
        }
    }
}

fn tasks(client: &Client, painter: &Painter, cmd: TasksCmd) -> anyhow::Result<()> {
    match cmd {
        TasksCmd::List => {
            let tasks = client.list_tasks()?;
            let mut table = Table::new(["id", "name", "func", "args", "cron", "enabled"]);
            for task in &tasks {
                table.row([
                    task.id.to_string(),
                    task.task_name.clone(),
                    task.task_func.clone(),
                    task.task_args.clone(),
                    task.task_cron.clone(),
                    if task.enable { "yes".into() } else { "no".into() },
                ]);
            }
            print!("{table}");
        }
        TasksCmd::Funcs => {
            let funcs = client.task_funcs()?;
            let mut table = Table::new(["func", "label", "args"]);
            for func in &funcs {
                table.row([
                    func.func_name.clone(),
                    func.func_label.clone(),
                    func.func_args.join(", "),
                ]);
            }
            print!("{table}");
        }
        TasksCmd::Add(args) => println!("{}", client.add_task(&args.into_task(0))?),
        TasksCmd::Update { id, task } => println!("{}", client.update_task(&task.into_task(id))?),
        TasksCmd::Rm { id } => println!("{}", client.delete_task(id)?),
        TasksCmd::Run { id } => println!("{}", client.run_task(id)?),
        TasksCmd::Log(args) => {
            let filter = TaskLogFilter {
                page: args.page.max(1),
                page_size: args.page_size.max(1),
                task_func: args.func,
            };
            let result = client.search_task_logs(&filter)?;
            let mut table = Table::new(["id", "task", "started", "took", "result"]);
            for log in &result.items {
                let outcome = if log.success {
                    log.execute_result.clone()
                } else {
                    format!("failed: {}", log.error)
                };
                table.row([
                    log.id.to_string(),
                    format!("{} ({})", log.task_name, log.task_func),
                    format_datetime(&log.start_time),
                    format_seconds(log.execute_seconds),
                    outcome,
                ]);
            }
            print!("{table}");
            print_page_footer(painter, filter.page, filter.page_size, result.total);
        }
    }
    Ok(())
}

impl TaskArgs {
    fn into_task(self, id: u64) -> Task {
        Task {
            id,
            task_name: self.name,
            task_func: self.func,
            task_args: self.args,
            task_cron: self.cron,
            enable: !self.disabled,
        }
    }
}

fn tokens(client: &Client, painter: &Painter, cmd: TokensCmd) -> anyhow::Result<()> {
    match cmd {
        TokensCmd::List => {
            let tokens = client.list_tokens()?;
            let mut table = Table::new(["id", "key", "created"]);
            for token in &tokens {
                table.row([
                    token.id.to_string(),
                    token.key.clone(),
                    format_datetime(&token.create_time),
                ]);
            }
            print!("{table}");
        }
        TokensCmd::Add { key } => {
            let key = key.unwrap_or_else(api::generate_key);
            let message = client.add_token(&key)?;
            println!("{message}");
            println!("key: {}", painter.bold(&key));
        }
        TokensCmd::Rm { id } => println!("{}", client.delete_token(id)?),
    }
    Ok(())
}

fn downloads(client: &Client, painter: &Painter, args: &DownloadsArgs) -> anyhow::Result<()> {
    let filter = DownloadLogFilter {
        page: args.page.max(1),
        page_size: args.page_size.max(1),
        downloader: args.downloader.clone(),
        save_path: args.save_path.clone(),
    };
    let result = client.search_download_logs(&filter)?;
    let mut table = Table::new(["id", "tid", "title", "size", "downloader", "save path", "time"]);
    for log in &result.items {
        table.row([
            log.id.to_string(),
            log.tid.to_string(),
            log.title.clone(),
            format_size(log.size),
            log.downloader.clone(),
            log.save_path.clone(),
            format_datetime(&log.download_time),
        ]);
    }
    print!("{table}");
    print_page_footer(painter, filter.page, filter.page_size, result.total);
    Ok(())
}

fn config(client: &Client, cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Get { key } => {
            let value = client.get_config(&key)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ConfigCmd::Set { key, json, file } => {
            let raw = match (json, file) {
                (Some(inline), _) => inline,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("cannot read {}", path.display()))?,
                (None, None) => bail!("pass the payload with --json or --file"),
            };
            let payload: serde_json::Value =
                serde_json::from_str(&raw).context("payload is not valid JSON")?;
            check_config_payload(&key, &payload)
                .with_context(|| format!("payload does not match the {key} schema"))?;
            println!("{}", client.set_config(&key, &payload)?);
        }
        ConfigCmd::Downloaders => {
            let downloaders = client.downloaders()?;
            let mut table = Table::new(["id", "save paths"]);
            for downloader in &downloaders {
                let paths: Vec<String> = downloader
                    .save_paths
                    .iter()
                    .map(|sp| {
                        if sp.label.is_empty() {
                            sp.path.clone()
                        } else {
                            format!("{} ({})", sp.path, sp.label)
                        }
                    })
                    .collect();
                table.row([downloader.id.clone(), paths.join(", ")]);
            }
            print!("{table}");
        }
    }
    Ok(())
}

fn user(client: &Client, cmd: UserCmd) -> anyhow::Result<()> {
    match cmd {
        UserCmd::Create { username, password } => {
            println!("{}", client.create_user(&username, &password)?)
        }
        UserCmd::Passwd { username, password } => {
            println!("{}", client.update_user(&username, &password)?)
        }
    }
    Ok(())
}

fn theme_cmd(
    painter: &Painter,
    saved: &mut Settings,
    path: &Path,
    cmd: ThemeCmd,
) -> anyhow::Result<()> {
    match cmd {
        ThemeCmd::List => {
            for theme in theme::builtin_themes() {
                let marker = if theme.name == saved.theme { "*" } else { " " };
                println!("{marker} {}", theme.name);
            }
        }
        ThemeCmd::Show { name } => {
            let name = name.unwrap_or_else(|| saved.theme.clone());
            let theme = theme::theme_by_name(&name);
            let resolved = theme.resolve()?;
            println!("{}", painter.bold(resolved.name));
            for ((role, oklch), (_, hex)) in theme.roles().into_iter().zip(resolved.roles()) {
                println!("  {} {role:<12} {oklch:<30} {hex}", painter.hex(hex, "██"));
            }
        }
        ThemeCmd::Use { name } => {
            let known = theme::builtin_themes();
            let Some(theme) = known
                .iter()
                .find(|theme| theme.name.eq_ignore_ascii_case(&name))
            else {
                let names: Vec<&str> = known.iter().map(|theme| theme.name).collect();
                bail!("unknown theme `{name}`, available: {}", names.join(", "));
            };
            saved.theme = theme.name.to_string();
            settings::save(saved, path)?;
            println!("theme set to {}", theme.name);
        }
    }
    Ok(())
}

fn prefs(saved: &mut Settings, path: &Path, args: &PrefsArgs) -> anyhow::Result<()> {
    let changed = args.theme.is_some() || args.images.is_some() || args.timeout.is_some();
    if let Some(name) = &args.theme {
        let known = theme::builtin_themes();
        let Some(theme) = known
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
        else {
            let names: Vec<&str> = known.iter().map(|theme| theme.name).collect();
            bail!("unknown theme `{name}`, available: {}", names.join(", "));
        };
        saved.theme = theme.name.to_string();
    }
    if let Some(mode) = args.images {
        saved.image_mode = mode;
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }
        saved.timeout_secs = timeout;
    }
    if changed {
        settings::save(saved, path)?;
    }
    println!("settings file: {}", path.display());
    println!("server:   {}", saved.server_url);
    println!("api key:  {}", mask_key(&saved.api_key));
    println!("theme:    {}", saved.theme);
    println!("images:   {}", saved.image_mode.as_str());
    println!("timeout:  {}s", saved.timeout_secs);
    Ok(())
}

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(none)".to_string();
    }
    let head: String = key.chars().take(6).collect();
    format!("{head}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_article_search_flags() {
        let cli = Cli::try_parse_from([
            "magpie", "articles", "list", "-k", "remux", "--page", "3", "--images", "hide",
        ])
        .unwrap();
        match cli.command {
            Command::Articles(ArticlesCmd::List(args)) => {
                assert_eq!(args.keyword, "remux");
                assert_eq!(args.page, 3);
                assert_eq!(args.page_size, 30);
                assert_eq!(args.images, Some(ImageMode::Hide));
            }
            other => panic!("parsed into {other:?}"),
        }
    }

    #[test]
    fn manual_push_needs_both_target_flags() {
        assert!(
            Cli::try_parse_from(["magpie", "articles", "push", "5", "--downloader", "qb"]).is_err()
        );
        let cli = Cli::try_parse_from([
            "magpie",
            "articles",
            "push",
            "5",
            "7",
            "--downloader",
            "qb",
            "--save-path",
            "/dl/movies",
        ])
        .unwrap();
        match cli.command {
            Command::Articles(ArticlesCmd::Push(args)) => {
                assert_eq!(args.tids, vec![5, 7]);
                assert_eq!(args.downloader.as_deref(), Some("qb"));
            }
            other => panic!("parsed into {other:?}"),
        }
    }

    #[test]
    fn config_set_requires_exactly_one_payload_source() {
        assert!(Cli::try_parse_from(["magpie", "config", "set", "DownloadFolder"]).is_err());
        assert!(Cli::try_parse_from([
            "magpie",
            "config",
            "set",
            "DownloadFolder",
            "--json",
            "[]",
            "--file",
            "f.json"
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "magpie",
            "config",
            "set",
            "DownloadFolder",
            "--json",
            "[]"
        ])
        .is_ok());
    }

    #[test]
    fn disabled_flag_inverts_task_enable() {
        let args = TaskArgs {
            name: "refresh".into(),
            func: "spider_south".into(),
            args: String::new(),
            cron: "0 3 * * *".into(),
            disabled: true,
        };
        let task = args.into_task(9);
        assert_eq!(task.id, 9);
        assert!(!task.enable);
    }

    #[test]
    fn global_flags_parse_after_subcommands() {
        let cli =
            Cli::try_parse_from(["magpie", "status", "--server", "http://magpie.lan:9000/"])
                .unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://magpie.lan:9000/"));
    }
}
