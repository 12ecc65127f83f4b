/// Greedy word wrap; always returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// `"1 phase"`, `"3 phases"`.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(wrap("missing phase LIQUID", 40), vec!["missing phase LIQUID"]);
        assert_eq!(
            wrap("CONSTITUENT references an undeclared phase", 20),
            vec!["CONSTITUENT", "references an", "undeclared phase"]
        );
    }

    #[test]
    fn wrap_empty_text_yields_one_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("PbTe", 10), "PbTe");
        assert_eq!(truncate("LIQUID", 6), "LIQUID");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("RHOMBOHEDRAL_A7", 8), "RHOMBOH…");
        assert_eq!(truncate("J/(mol·K) entropy", 4), "J/(…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn count_noun_picks_form() {
        assert_eq!(count_noun(1, "phase", "phases"), "1 phase");
        assert_eq!(count_noun(0, "species", "species"), "0 species");
        assert_eq!(count_noun(3, "element", "elements"), "3 elements");
    }
}
