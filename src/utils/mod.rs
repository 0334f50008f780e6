//! 通用工具函数

/// 将模型输出按行切分为条目列表
///
/// 这是一个刻意宽容的解析契约：逐行切分、去除首尾空白、丢弃空行，
/// 不做任何更严格的格式校验。空字符串切分后得到零个条目，不视为错误。
pub fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 按字符数截断过长的文本，用于控制嵌入prompt的内容规模
///
/// 按字符边界截断，避免在多字节字符中间切断。
pub fn truncate_for_prompt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...(已截断)", truncated)
}
