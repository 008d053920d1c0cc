//! 菜单命令处理
//!
//! 主菜单的七个选项：键盘输入、文件输入、查看图与三种算法。

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::session::GraphSession;

use super::printer::Printer;

/// 菜单提示符
pub const PROMPT: &str = "Enter a number [1-7]: ";

/// 输入边的提示符
pub const EDGE_PROMPT: &str = "Enter an edge [src>dest:weight] or return to quit: ";

/// 输入起点的提示符
pub const START_PROMPT: &str = "Enter the start label: ";

/// 输入文件名的提示符
pub const FILE_PROMPT: &str = "Enter the file name or return to quit: ";

/// 主菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    KeyboardInput,
    FileInput,
    ViewGraph,
    ShortestPaths,
    SpanningTree,
    TopoSort,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::KeyboardInput,
        MenuCommand::FileInput,
        MenuCommand::ViewGraph,
        MenuCommand::ShortestPaths,
        MenuCommand::SpanningTree,
        MenuCommand::TopoSort,
        MenuCommand::Exit,
    ];

    /// 菜单编号
    pub fn number(&self) -> usize {
        match self {
            MenuCommand::KeyboardInput => 1,
            MenuCommand::FileInput => 2,
            MenuCommand::ViewGraph => 3,
            MenuCommand::ShortestPaths => 4,
            MenuCommand::SpanningTree => 5,
            MenuCommand::TopoSort => 6,
            MenuCommand::Exit => 7,
        }
    }

    /// 简写命令名，用于补全
    pub fn name(&self) -> &'static str {
        match self {
            MenuCommand::KeyboardInput => "keyboard",
            MenuCommand::FileInput => "file",
            MenuCommand::ViewGraph => "view",
            MenuCommand::ShortestPaths => "paths",
            MenuCommand::SpanningTree => "tree",
            MenuCommand::TopoSort => "sort",
            MenuCommand::Exit => "exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuCommand::KeyboardInput => "Input a graph from the keyboard",
            MenuCommand::FileInput => "Input a graph from a file",
            MenuCommand::ViewGraph => "View the current graph",
            MenuCommand::ShortestPaths => "Single source shortest paths",
            MenuCommand::SpanningTree => "Minimum spanning tree",
            MenuCommand::TopoSort => "Topological sort",
            MenuCommand::Exit => "Exit the program",
        }
    }

    /// 对应的算法
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            MenuCommand::ShortestPaths => Some(Algorithm::ShortestPaths),
            MenuCommand::SpanningTree => Some(Algorithm::SpanningTree),
            MenuCommand::TopoSort => Some(Algorithm::TopoSort),
            _ => None,
        }
    }
}

/// 命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 主菜单文本
pub fn menu_text() -> String {
    let mut text = String::from("\nMain Menu\n");
    for cmd in MenuCommand::ALL {
        text.push_str(&format!("  {}  {}\n", cmd.number(), cmd.description()));
    }
    text
}

/// 解析菜单输入：编号或简写命令名
pub fn parse_command(input: &str) -> Option<MenuCommand> {
    let input = input.trim().to_lowercase();
    if let Ok(n) = input.parse::<usize>() {
        return MenuCommand::ALL.into_iter().find(|c| c.number() == n);
    }
    match input.as_str() {
        "quit" | "q" => Some(MenuCommand::Exit),
        name => MenuCommand::ALL.into_iter().find(|c| c.name() == name),
    }
}

/// 执行菜单命令
///
/// `read_line` 用给定提示符读取一行，输入结束时返回 None。
pub fn execute_menu_command<F>(
    cmd: MenuCommand,
    session: &mut GraphSession,
    printer: &Printer,
    mut read_line: F,
) -> CommandResult
where
    F: FnMut(&str) -> Option<String>,
{
    match cmd {
        MenuCommand::KeyboardInput => {
            let mut rep = String::new();
            loop {
                match read_line(EDGE_PROMPT) {
                    Some(line) if !line.trim().is_empty() => {
                        rep.push_str(line.trim());
                        rep.push(' ');
                    }
                    Some(_) => break,
                    None => return CommandResult::Continue,
                }
            }
            let start = match read_line(START_PROMPT) {
                Some(start) => start,
                None => return CommandResult::Continue,
            };
            created(session.create_graph(&rep, &start).map(|_| ()))
        }

        MenuCommand::FileInput => {
            let name = match read_line(FILE_PROMPT) {
                Some(name) if !name.trim().is_empty() => name,
                _ => return CommandResult::Continue,
            };
            match session.load_file(name.trim()) {
                Err(Error::Io(e)) => {
                    CommandResult::Error(format!("Incorrect file name or path: {}", e))
                }
                result => created(result.map(|_| ())),
            }
        }

        MenuCommand::ViewGraph => match session.graph() {
            Some(graph) => {
                CommandResult::Message(printer.format_graph(graph, session.start_label()))
            }
            None => CommandResult::Error(Error::NoGraph.to_string()),
        },

        MenuCommand::ShortestPaths | MenuCommand::SpanningTree | MenuCommand::TopoSort => {
            let algorithm = match cmd.algorithm() {
                Some(algorithm) => algorithm,
                None => return CommandResult::Continue,
            };
            match session.run(algorithm) {
                Ok(output) => CommandResult::Message(printer.format_output(&output)),
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }

        MenuCommand::Exit => CommandResult::Exit,
    }
}

fn created(result: crate::error::Result<()>) -> CommandResult {
    match result {
        Ok(()) => CommandResult::Message("Graph created successfully".to_string()),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PrintMode;

    fn feed(lines: &[&str]) -> impl FnMut(&str) -> Option<String> {
        let mut lines: Vec<String> = lines.iter().rev().map(|s| s.to_string()).collect();
        move |_| lines.pop()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1"), Some(MenuCommand::KeyboardInput));
        assert_eq!(parse_command(" 7 "), Some(MenuCommand::Exit));
        assert_eq!(parse_command("Tree"), Some(MenuCommand::SpanningTree));
        assert_eq!(parse_command("q"), Some(MenuCommand::Exit));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("8"), None);
        assert_eq!(parse_command("graph"), None);
    }

    #[test]
    fn test_menu_text() {
        let text = menu_text();
        assert!(text.contains("  1  Input a graph from the keyboard\n"));
        assert!(text.contains("  7  Exit the program\n"));
    }

    #[test]
    fn test_keyboard_input_then_sort() {
        let mut session = GraphSession::default();
        let printer = Printer::new(PrintMode::Plain);

        let result = execute_menu_command(
            MenuCommand::KeyboardInput,
            &mut session,
            &printer,
            feed(&["A>B:1", "B>C:1", "A>C:1", "", "A"]),
        );
        assert_eq!(
            result,
            CommandResult::Message("Graph created successfully".to_string())
        );

        let result = execute_menu_command(MenuCommand::TopoSort, &mut session, &printer, feed(&[]));
        assert_eq!(result, CommandResult::Message("Sort: A B C\n".to_string()));
    }

    #[test]
    fn test_errors_reported() {
        let mut session = GraphSession::default();
        let printer = Printer::default();

        let result = execute_menu_command(MenuCommand::ViewGraph, &mut session, &printer, feed(&[]));
        assert!(matches!(result, CommandResult::Error(_)));

        let result = execute_menu_command(
            MenuCommand::KeyboardInput,
            &mut session,
            &printer,
            feed(&["A>B:1", "", "Z"]),
        );
        assert!(matches!(result, CommandResult::Error(_)));
        assert!(session.graph().is_none());

        let result = execute_menu_command(
            MenuCommand::FileInput,
            &mut session,
            &printer,
            feed(&["/nonexistent/graph.txt"]),
        );
        match result {
            CommandResult::Error(msg) => assert!(msg.starts_with("Incorrect file name")),
            other => panic!("unexpected result: {:?}", other),
        }

        let result = execute_menu_command(MenuCommand::FileInput, &mut session, &printer, feed(&[""]));
        assert_eq!(result, CommandResult::Continue);

        let result = execute_menu_command(MenuCommand::Exit, &mut session, &printer, feed(&[]));
        assert_eq!(result, CommandResult::Exit);
    }
}
