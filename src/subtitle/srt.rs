// SPDX-License-Identifier: MPL-2.0
//! SubRip (`.srt`) parsing.
//!
//! Accepts the usual sequential numbered blocks:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:02,500
//! First line
//! Second line
//! ```
//!
//! Input may carry a UTF-8 byte order mark (common for files exported on
//! Windows) and either `\n` or `\r\n` line endings. No repair is attempted:
//! a block with an unreadable timing line fails the whole parse.

use super::{SubtitleEntry, SubtitleError, TimeMs};

/// Parses SRT content into a sequence of entries, in file order.
///
/// An empty (or whitespace-only) input yields an empty sequence, matching
/// how lenient players treat an empty file.
pub fn parse(input: &str) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    // Line endings are normalized up front so the blank-line block
    // separator matches in CRLF files too.
    let input = input.replace("\r\n", "\n");

    let mut entries = Vec::new();
    for block in input.split("\n\n").map(str::trim) {
        if block.is_empty() {
            continue;
        }
        entries.push(parse_block(block)?);
    }
    Ok(entries)
}

fn parse_block(block: &str) -> Result<SubtitleEntry, SubtitleError> {
    let mut lines = block.lines();

    let first = lines
        .next()
        .ok_or_else(|| SubtitleError::Malformed(block.to_string()))?;

    // The numeric cue index line is optional; some files omit it.
    let timing_line = if first.trim().parse::<u64>().is_ok() {
        lines
            .next()
            .ok_or_else(|| SubtitleError::Malformed(first.to_string()))?
    } else {
        first
    };

    let (start, end) = parse_timing(timing_line)?;
    let text = lines.collect::<Vec<_>>().join("\n");

    Ok(SubtitleEntry { start, end, text })
}

fn parse_timing(line: &str) -> Result<(TimeMs, TimeMs), SubtitleError> {
    let (start, end) = line
        .split_once("-->")
        .ok_or_else(|| SubtitleError::Malformed(line.to_string()))?;

    let start = parse_timestamp(start.trim())?;
    let end = parse_timestamp(end.trim())?;

    if start > end {
        return Err(SubtitleError::InvalidTimestamp(line.to_string()));
    }
    Ok((start, end))
}

/// Parses `HH:MM:SS,mmm` into milliseconds. A `.` millisecond separator is
/// accepted as well since it shows up in files converted from WebVTT.
fn parse_timestamp(ts: &str) -> Result<TimeMs, SubtitleError> {
    let invalid = || SubtitleError::InvalidTimestamp(ts.to_string());

    let (clock, millis) = ts
        .split_once(',')
        .or_else(|| ts.split_once('.'))
        .ok_or_else(invalid)?;

    let mut parts = clock.split(':');
    let hours: TimeMs = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let minutes: TimeMs = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let seconds: TimeMs = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    let millis: TimeMs = millis.trim().parse().map_err(|_| invalid())?;

    Ok(((hours * 3600 + minutes * 60 + seconds) * 1000) + millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1\n00:00:00,000 --> 00:00:01,000\nA\n\n2\n00:00:01,000 --> 00:00:02,500\nB\n\n3\n00:00:02,500 --> 00:00:04,000\nC\n";

    #[test]
    fn parses_sequential_blocks() {
        let entries = parse(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].start, 0);
        assert_eq!(entries[1].start, 1000);
        assert_eq!(entries[1].end, 2500);
        assert_eq!(entries[2].text, "C");
    }

    #[test]
    fn accepts_bom_prefix() {
        let input = format!("\u{feff}{}", SAMPLE);
        let entries = parse(&input).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let input = "1\r\n00:00:01,500 --> 00:00:03,000\r\nHello\r\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].start, 1500);
        assert_eq!(entries[0].text, "Hello");
    }

    #[test]
    fn splits_crlf_separated_blocks() {
        let input = "1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\n\r\n\
                     2\r\n00:00:03,000 --> 00:00:04,000\r\nWorld\r\nagain\r\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "Hello");
        assert_eq!(entries[1].start, 3000);
        assert_eq!(entries[1].text, "World\nagain");
    }

    #[test]
    fn accepts_bom_prefixed_crlf_file() {
        let input =
            "\u{feff}1\r\n00:00:00,000 --> 00:00:01,000\r\nA\r\n\r\n2\r\n00:00:01,000 --> 00:00:02,000\r\nB\r\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "B");
    }

    #[test]
    fn joins_multi_line_cue_text() {
        let input = "1\n00:00:00,000 --> 00:00:01,000\nfirst\nsecond\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].text, "first\nsecond");
    }

    #[test]
    fn parses_hours_component() {
        let input = "1\n01:02:03,004 --> 01:02:04,000\nlate\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].start, 3_723_004);
    }

    #[test]
    fn accepts_missing_index_line() {
        let input = "00:00:00,000 --> 00:00:01,000\nno index\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "no index");
    }

    #[test]
    fn accepts_dot_millisecond_separator() {
        let input = "1\n00:00:00.250 --> 00:00:01.000\nvtt-ish\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].start, 250);
    }

    #[test]
    fn empty_input_yields_empty_track() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_timing_line_fails() {
        let input = "1\nnot a timing line\ntext\n";
        assert!(matches!(parse(input), Err(SubtitleError::Malformed(_))));
    }

    #[test]
    fn garbled_timestamp_fails() {
        let input = "1\n00:xx:00,000 --> 00:00:01,000\ntext\n";
        assert!(matches!(
            parse(input),
            Err(SubtitleError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn reversed_range_fails() {
        let input = "1\n00:00:02,000 --> 00:00:01,000\ntext\n";
        assert!(matches!(
            parse(input),
            Err(SubtitleError::InvalidTimestamp(_))
        ));
    }
}
