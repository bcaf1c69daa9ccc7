//! 显示区域写入能力 - 基础设施层
//!
//! 渲染层只产出有序的行，真正的绘制交给宿主实现的 [`DisplayWriter`]。

use std::sync::{Mutex, MutexGuard};

/// 显示区域写入能力
///
/// 每次写入都整体替换区域内容。
pub trait DisplayWriter: Send + Sync {
    fn write_lines(&self, lines: &[String]);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 内存显示区域
///
/// 保存最近一次写入的行和写入次数
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    state: Mutex<(Vec<String>, usize)>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次写入的行
    pub fn lines(&self) -> Vec<String> {
        lock(&self.state).0.clone()
    }

    /// 写入次数
    pub fn write_count(&self) -> usize {
        lock(&self.state).1
    }
}

impl DisplayWriter for MemoryDisplay {
    fn write_lines(&self, lines: &[String]) {
        let mut state = lock(&self.state);
        state.0 = lines.to_vec();
        state.1 += 1;
    }
}

/// HTML 显示区域
///
/// 每行生成一个 `<p>` 元素，内容做 HTML 转义
#[derive(Debug, Default)]
pub struct HtmlDisplay {
    inner_html: Mutex<String>,
}

impl HtmlDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前区域的 HTML
    pub fn inner_html(&self) -> String {
        lock(&self.inner_html).clone()
    }
}

impl DisplayWriter for HtmlDisplay {
    fn write_lines(&self, lines: &[String]) {
        *lock(&self.inner_html) = to_paragraphs(lines);
    }
}

/// 把行转换为 `<p>` 段落
pub fn to_paragraphs(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_per_line_including_blank() {
        let lines = vec!["A".to_string(), "B".to_string(), String::new()];
        assert_eq!(to_paragraphs(&lines), "<p>A</p><p>B</p><p></p>");
    }

    #[test]
    fn test_route_arrows_are_escaped() {
        let lines = vec!["Acme -> Paris".to_string()];
        assert_eq!(to_paragraphs(&lines), "<p>Acme -&gt; Paris</p>");
    }

    #[test]
    fn test_html_display_replaces_content() {
        let display = HtmlDisplay::new();
        display.write_lines(&["first".to_string()]);
        display.write_lines(&["<b>second</b>".to_string()]);
        assert_eq!(display.inner_html(), "<p>&lt;b&gt;second&lt;/b&gt;</p>");
    }

    #[test]
    fn test_memory_display_counts_writes() {
        let display = MemoryDisplay::new();
        assert_eq!(display.write_count(), 0);
        display.write_lines(&["x".to_string()]);
        assert_eq!(display.lines(), vec!["x"]);
        assert_eq!(display.write_count(), 1);
    }
}
