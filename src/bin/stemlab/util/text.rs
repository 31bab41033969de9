/// Greedy word wrap at `width` characters. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = line.chars().count() + word.chars().count() + 1;
        if !line.is_empty() && needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Shortens `s` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some(_) if max_chars == 0 => String::new(),
        Some(_) => {
            let keep: String = s.chars().take(max_chars - 1).collect();
            format!("{keep}…")
        }
    }
}

/// Long sequences shown as head and tail with the total length between.
pub fn preview(seq: &str, max_chars: usize) -> String {
    let len = seq.chars().count();
    if len <= max_chars {
        return seq.to_string();
    }

    let marker = format!("…({len})…");
    let room = max_chars.saturating_sub(marker.chars().count());
    if room < 2 {
        return truncate(seq, max_chars);
    }

    let head: String = seq.chars().take(room - room / 2).collect();
    let tail: String = seq.chars().skip(len - room / 2).collect();
    format!("{head}{marker}{tail}")
}
