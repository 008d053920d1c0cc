//! 菜单命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：匹配菜单命令名，否则按文件路径补全

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::commands::MenuCommand;

/// 额外的命令别名
const EXTRA_COMMANDS: &[&str] = &["quit", "q"];

/// graphdemo CLI 输入辅助
pub struct MenuHelper {
    files: FilenameCompleter,
}

impl Default for MenuHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuHelper {
    pub fn new() -> Self {
        Self {
            files: FilenameCompleter::new(),
        }
    }

    /// 补全菜单命令名，没有匹配时返回空列表
    pub fn complete_command(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let word = line_to_cursor.trim_start();
        if word.is_empty() || word.contains(char::is_whitespace) {
            return (pos, vec![]);
        }

        let start_pos = pos - word.len();
        let word = word.to_lowercase();
        let completions = MenuCommand::ALL
            .iter()
            .map(|c| c.name())
            .chain(EXTRA_COMMANDS.iter().copied())
            .filter(|name| name.starts_with(&word))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        (start_pos, completions)
    }
}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, completions) = self.complete_command(line, pos);
        if !completions.is_empty() {
            return Ok((start, completions));
        }
        self.files.complete(line, pos, ctx)
    }
}

impl Hinter for MenuHelper {
    type Hint = String;
}

impl Highlighter for MenuHelper {}

impl Validator for MenuHelper {}

impl Helper for MenuHelper {}
