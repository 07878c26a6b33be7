//! Paginated text document writer: a fixed title line, then the body
//! reflowed to a fixed page width, split into pages by form feeds.

use std::fs::File;
use std::io::Write;
use std::path::Path;

const PAGE_WIDTH: usize = 80;
const LINES_PER_PAGE: usize = 54;

/// Wrap text to `width` columns, breaking on whitespace. Empty source
/// lines survive as paragraph separators; a word longer than the width
/// gets a line of its own.
fn reflow(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len == 0 {
                current = word.to_string();
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_len = word_len;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

pub fn write_document(path: &Path, title: &str, text: &str) -> Result<(), String> {
    let mut file = File::create(path).map_err(|e| e.to_string())?;

    writeln!(file, "{}", title).map_err(|e| e.to_string())?;
    writeln!(file).map_err(|e| e.to_string())?;

    // Title and separator occupy the first two lines of page one.
    let mut line_on_page = 2usize;
    for line in reflow(text, PAGE_WIDTH) {
        if line_on_page >= LINES_PER_PAGE {
            write!(file, "\u{c}").map_err(|e| e.to_string())?;
            line_on_page = 0;
        }
        writeln!(file, "{}", line).map_err(|e| e.to_string())?;
        line_on_page += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(title: &str, text: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_document(&path, title, text).unwrap();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn title_is_the_first_line() {
        let out = render("Kotha Lipi Original Transcription", "বাংলা কথা");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Kotha Lipi Original Transcription"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("বাংলা কথা"));
    }

    #[test]
    fn reflow_respects_page_width() {
        let body = "কথা ".repeat(500);
        for line in reflow(&body, PAGE_WIDTH) {
            assert!(line.chars().count() <= PAGE_WIDTH, "line too wide: {line:?}");
        }
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let word: String = "ক".repeat(PAGE_WIDTH + 10);
        let lines = reflow(&word, PAGE_WIDTH);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], word);
    }

    #[test]
    fn empty_lines_separate_paragraphs() {
        let lines = reflow("প্রথম\n\nদ্বিতীয়", PAGE_WIDTH);
        assert_eq!(lines, ["প্রথম", "", "দ্বিতীয়"]);
    }

    #[test]
    fn long_body_gets_page_breaks() {
        // One word per source line, comfortably past one page.
        let body = vec!["শব্দ"; LINES_PER_PAGE * 2].join("\n");
        let out = render("শিরোনাম", &body);
        assert!(out.contains('\u{c}'), "expected a form-feed page break");
    }

    #[test]
    fn empty_body_is_just_the_title() {
        let out = render("শিরোনাম", "");
        assert_eq!(out, "শিরোনাম\n\n");
    }
}
