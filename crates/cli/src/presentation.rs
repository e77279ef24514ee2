// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use comfy_table::{Cell, CellAlignment, Table, presets};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use whitespace_stats_core::{Encoding, TextStatistics};
use whitespace_stats_engine::options::OutputFormat;
use whitespace_stats_engine::stats::{FileReport, RunResult};

/// Column titles of the delimited and table reports.
pub const COLUMNS: [&str; 12] = [
    "Directory",
    "File",
    "Type",
    "All lines",
    "LF ending lines",
    "CR+LF ending lines",
    "Leading spaces lines",
    "Leading tabs lines",
    "Leading mixed lines",
    "Non-leading tabs lines",
    "Trailing whitespace lines",
    "Any sole CR lines",
];

const TOTAL_LABEL: &str = "TOTAL";

/// Serialised shape of one report (json/jsonl/yaml).
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    path: Cow<'a, str>,
    is_text: bool,
    encoding: Option<Encoding>,
    #[serde(rename = "type")]
    kind: &'static str,
    statistics: Option<&'a TextStatistics>,
}

impl<'a> From<&'a FileReport> for ReportView<'a> {
    fn from(report: &'a FileReport) -> Self {
        let c = &report.characteristics;
        Self {
            path: report.path.to_string_lossy(),
            is_text: c.is_text,
            encoding: c.encoding,
            kind: c.type_label(),
            statistics: c.statistics.as_ref(),
        }
    }
}

/// Write the run result in the configured format.
///
/// # Errors
///
/// Fails when writing to `out` or serialising fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let reports: Vec<&FileReport> = result
        .reports
        .iter()
        .filter(|r| !config.text_only || r.characteristics.is_text)
        .collect();

    match config.format {
        OutputFormat::Csv => write_sv(out, &reports, result, config, config.delimiter),
        OutputFormat::Tsv => write_sv(out, &reports, result, config, '\t'),
        OutputFormat::Table => write_table(out, &reports, result, config),
        OutputFormat::Json => {
            let views: Vec<ReportView<'_>> = reports.into_iter().map(ReportView::from).collect();
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Jsonl => {
            for report in reports {
                serde_json::to_writer(&mut *out, &ReportView::from(report))?;
                writeln!(out)?;
            }
            Ok(())
        }
        OutputFormat::Yaml => {
            let views: Vec<ReportView<'_>> = reports.into_iter().map(ReportView::from).collect();
            serde_yaml::to_writer(&mut *out, &views)?;
            Ok(())
        }
    }
}

/// Cells of one report row; statistic cells stay empty for binary files.
fn row_cells(report: &FileReport) -> Vec<String> {
    let mut cells = vec![
        report.directory().display().to_string(),
        report.file_name(),
        report.characteristics.type_label().to_string(),
    ];
    match &report.characteristics.statistics {
        Some(stats) => cells.extend(stat_cells(stats)),
        None => cells.extend(std::iter::repeat_n(String::new(), COLUMNS.len() - 3)),
    }
    cells
}

fn total_cells(totals: &TextStatistics, files: usize) -> Vec<String> {
    let mut cells = vec![TOTAL_LABEL.to_string(), format!("{files} files"), String::new()];
    cells.extend(stat_cells(totals));
    cells
}

fn stat_cells(stats: &TextStatistics) -> [String; 9] {
    [
        stats.all_lines,
        stats.lf_lines,
        stats.crlf_lines,
        stats.leading_spaces_lines,
        stats.leading_tabs_lines,
        stats.leading_mixed_lines,
        stats.non_leading_tabs_lines,
        stats.trailing_whitespace_lines,
        stats.sole_cr_lines,
    ]
    .map(|n| n.to_string())
}

/// Quote a field that contains the delimiter, a quote or a line break.
fn escape_field(field: &str, delimiter: char) -> Cow<'_, str> {
    if field.contains([delimiter, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_record<W: Write, S: AsRef<str>>(out: &mut W, fields: &[S], delimiter: char) -> Result<()> {
    let mut sep = [0u8; 4];
    let sep = delimiter.encode_utf8(&mut sep);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(sep.as_bytes())?;
        }
        out.write_all(escape_field(field.as_ref(), delimiter).as_bytes())?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_sv<W: Write>(
    out: &mut W,
    reports: &[&FileReport],
    result: &RunResult,
    config: &Config,
    delimiter: char,
) -> Result<()> {
    if config.header {
        write_record(out, &COLUMNS, delimiter)?;
    }
    for report in reports {
        write_record(out, &row_cells(report), delimiter)?;
    }
    if config.total_row {
        let files = result.text_files().count();
        write_record(out, &total_cells(&result.totals(), files), delimiter)?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, reports: &[&FileReport], result: &RunResult, config: &Config) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    if config.header {
        table.set_header(COLUMNS.to_vec());
    }

    let numeric = |i: usize, text: String| {
        let cell = Cell::new(text);
        if i >= 3 { cell.set_alignment(CellAlignment::Right) } else { cell }
    };

    for report in reports {
        table.add_row(row_cells(report).into_iter().enumerate().map(|(i, s)| numeric(i, s)));
    }
    if config.total_row {
        let files = result.text_files().count();
        table.add_row(
            total_cells(&result.totals(), files)
                .into_iter()
                .enumerate()
                .map(|(i, s)| numeric(i, s)),
        );
    }

    writeln!(out, "{table}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use whitespace_stats_core::{FileCharacteristics, TextAnalyzer};

    fn sample() -> RunResult {
        let text = FileCharacteristics::classify(None, TextAnalyzer::analyze_str("  a\r\n\tb \n"));
        let bom = FileCharacteristics::classify(Some(Encoding::Utf8), TextAnalyzer::analyze_str("x\n"));
        RunResult {
            reports: vec![
                FileReport::new(PathBuf::from("dir/a.txt"), text),
                FileReport::new(PathBuf::from("dir/b;c.txt"), bom),
                FileReport::new(PathBuf::from("dir/d.bin"), FileCharacteristics::binary()),
            ],
            errors: vec![],
        }
    }

    fn render(config: &Config) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_uses_semicolons_and_column_titles() {
        let out = render(&Config::default());
        let mut lines = out.lines();

        assert_eq!(lines.next().unwrap(), COLUMNS.join(";"));
        assert_eq!(lines.next().unwrap(), "dir;a.txt;Any 8 bit text;2;1;1;1;1;0;0;1;0");
        assert_eq!(lines.next().unwrap(), "dir;\"b;c.txt\";UTF-8;1;1;0;0;0;0;0;0;0");
        assert_eq!(lines.next().unwrap(), "dir;d.bin;Binary;;;;;;;;;");
        assert!(lines.next().is_none());
    }

    #[test]
    fn tsv_without_header_and_text_only() {
        let config = Config {
            format: OutputFormat::Tsv,
            header: false,
            text_only: true,
            ..Config::default()
        };
        let out = render(&config);

        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("dir\ta.txt\tAny 8 bit text\t2\t"));
        assert!(!out.contains("Binary"));
    }

    #[test]
    fn total_row_sums_text_files() {
        let config = Config {
            total_row: true,
            ..Config::default()
        };
        let out = render(&config);

        assert_eq!(out.lines().last().unwrap(), "TOTAL;2 files;;3;2;1;1;1;0;0;1;0");
    }

    #[test]
    fn json_has_type_and_null_statistics_for_binary() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let value: serde_json::Value = serde_json::from_str(&render(&config)).unwrap();
        let items = value.as_array().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["type"], "Any 8 bit text");
        assert_eq!(items[0]["statistics"]["all_lines"], 2);
        assert_eq!(items[1]["encoding"], "UTF-8");
        assert_eq!(items[2]["is_text"], false);
        assert!(items[2]["statistics"].is_null());
    }

    #[test]
    fn jsonl_one_object_per_line() {
        let config = Config {
            format: OutputFormat::Jsonl,
            ..Config::default()
        };
        let out = render(&config);

        assert_eq!(out.lines().count(), 3);
        for line in out.lines() {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn table_contains_headers_and_labels() {
        let config = Config {
            format: OutputFormat::Table,
            ..Config::default()
        };
        let out = render(&config);

        assert!(out.contains("Trailing whitespace lines"));
        assert!(out.contains("Binary"));
    }

    #[test]
    fn escape_field_quotes_embedded_quotes() {
        assert_eq!(escape_field("a\"b", ';'), "\"a\"\"b\"");
        assert_eq!(escape_field("plain", ';'), "plain");
    }
}
