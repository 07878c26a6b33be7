//! Transcript sanitizer.
//!
//! The model is instructed to answer in pure Bengali with diacritized
//! Arabic quotations, but it occasionally leaks English filler, timestamps,
//! or speaker labels anyway. The sanitizer enforces the contract after the
//! fact: the result contains only Bengali, Arabic, whitespace, and the
//! punctuation set `।?!()`.

fn in_bengali_block(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

fn in_arabic_block(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// `।` (danda) lives outside the Bengali block, so it is listed here.
fn is_permitted_punct(c: char) -> bool {
    matches!(c, '।' | '?' | '!' | '(' | ')')
}

fn strip_latin_alnum(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_alphanumeric()).collect()
}

/// Match a timestamp token at `start`: one or two digits, `:`, two digits,
/// optionally `:` plus two more, each bracket independently optional.
/// Returns the exclusive end index of the match.
fn match_timestamp(chars: &[char], start: usize) -> Option<usize> {
    let digit_at = |i: usize| chars.get(i).map_or(false, |c| c.is_ascii_digit());

    let mut i = start;
    if chars.get(i) == Some(&'[') {
        i += 1;
    }
    let first_digit = i;
    while i < chars.len() && chars[i].is_ascii_digit() && i - first_digit < 2 {
        i += 1;
    }
    if i == first_digit {
        return None;
    }
    if chars.get(i) != Some(&':') {
        return None;
    }
    i += 1;
    if !digit_at(i) || !digit_at(i + 1) {
        return None;
    }
    i += 2;
    if chars.get(i) == Some(&':') && digit_at(i + 1) && digit_at(i + 2) {
        i += 3;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    Some(i)
}

/// Remove timestamp-shaped tokens (`12:34`, `1:02:03`, `[00:15]`).
pub fn strip_timestamps(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(end) = match_timestamp(&chars, i) {
            i = end;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Clean a raw transcription for display and archival. Rules run in order:
/// Latin letters and digits out, timestamp tokens out, everything outside
/// the target scripts and permitted punctuation out, whitespace collapsed
/// and trimmed. Stripping everything yields `""`, which the UI renders as
/// "no speech detected" rather than an error.
pub fn sanitize_transcript(raw: &str) -> String {
    let stripped = strip_latin_alnum(raw);
    let stripped = strip_timestamps(&stripped);
    let filtered: String = stripped
        .chars()
        .filter(|&c| {
            in_bengali_block(c) || in_arabic_block(c) || c.is_whitespace() || is_permitted_punct(c)
        })
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_latin_digits_and_timestamps() {
        assert_eq!(
            sanitize_transcript("Hello 12:34 বাংলা text আরবি"),
            "বাংলা আরবি"
        );
    }

    #[test]
    fn keeps_permitted_punctuation() {
        assert_eq!(
            sanitize_transcript("আপনি কেমন আছেন? ভালো! (হ্যাঁ) আলহামদুলিল্লাহ।"),
            "আপনি কেমন আছেন? ভালো! (হ্যাঁ) আলহামদুলিল্লাহ।"
        );
    }

    #[test]
    fn keeps_diacritized_arabic() {
        let quran = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";
        assert_eq!(sanitize_transcript(quran), quran);
    }

    #[test]
    fn all_stripped_input_yields_empty_string() {
        assert_eq!(sanitize_transcript("Speaker 1: [00:01] hello..."), "");
        assert_eq!(sanitize_transcript(""), "");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(sanitize_transcript("  বাংলা \n\t  কথা  "), "বাংলা কথা");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Hello 12:34 বাংলা text আরবি",
            "[1:02:03] কথা শুরু",
            "abc123 !?। ()",
            "বাংলা ও العربية একসাথে",
        ];
        for input in inputs {
            let once = sanitize_transcript(input);
            assert_eq!(sanitize_transcript(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_never_contains_ascii_alphanumerics() {
        let inputs = ["x1y2z3 বাংলা", "12:34:56", "mixed বাংলা words 99"];
        for input in inputs {
            let out = sanitize_transcript(input);
            assert!(
                !out.chars().any(|c| c.is_ascii_alphanumeric()),
                "leaked alnum in {out:?}"
            );
        }
    }

    #[test]
    fn timestamp_scanner_handles_shapes() {
        assert_eq!(strip_timestamps("12:34"), "");
        assert_eq!(strip_timestamps("1:02:03"), "");
        assert_eq!(strip_timestamps("[00:15]"), "");
        assert_eq!(strip_timestamps("[7:05"), "");
        // Three leading digits: only the trailing two start a match.
        assert_eq!(strip_timestamps("123:45"), "1");
        // Not timestamp-shaped at all.
        assert_eq!(strip_timestamps("12:3"), "12:3");
        assert_eq!(strip_timestamps("::"), "::");
    }
}
