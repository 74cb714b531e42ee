//! Integration tests for tabtsv document conversion

use pretty_assertions::assert_eq;
use tabtsv::{
    convert_tables_inline, convert_text, extract_tables, format_as_markdown, format_as_tsv,
    files::{self, FileSink, MemorySink, OutputSink},
    SourceFormat, TsvOptions,
};

const STATBLOCK: &str = "\
# Goblin Warchief CR 3

**Defense**

| AC | HP | Saves |
|:---|:---:|---:|
| 17, touch 12 | 32 (5d10+5) | Fort +5, Ref +3, Will +1 |

Ferocious and cunning, the warchief leads from the front.

```text
| not | a table |
| --- | --- |
```

**Offense**
| Melee | Ranged |
| --- | --- |
| scimitar +8 (1d6+3/18-20) | shortbow +7 (1d4/x3) |
Special Attacks rage (8 rounds/day)
";

// ============================================================================
// Inline Rewrite
// ============================================================================

mod inline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_statblock_document() {
        let result = convert_tables_inline(STATBLOCK);
        assert_eq!(result.tables_converted, 2);

        let expected = "\
# Goblin Warchief CR 3

**Defense**

AC\tHP\tSaves
17, touch 12\t32 (5d10+5)\tFort +5, Ref +3, Will +1

Ferocious and cunning, the warchief leads from the front.

```text
| not | a table |
| --- | --- |
```

**Offense**
Melee\tRanged
scimitar +8 (1d6+3/18-20)\tshortbow +7 (1d4/x3)

Special Attacks rage (8 rounds/day)
";
        assert_eq!(result.text, expected);
    }

    #[test]
    fn test_rewrite_is_stable() {
        let once = convert_tables_inline(STATBLOCK).text;
        let twice = convert_tables_inline(&once);
        assert_eq!(twice.tables_converted, 0);
        assert_eq!(twice.text, once);
    }

    #[test]
    fn test_trailing_newline_presence_preserved() {
        let without = "| a | b |\n| --- | --- |\n| 1 | 2 |";
        assert!(!convert_tables_inline(without).text.ends_with('\n'));

        let with = format!("{without}\n");
        assert!(convert_tables_inline(&with).text.ends_with('\n'));
        assert!(!convert_tables_inline(&with).text.ends_with("\n\n"));
    }
}

// ============================================================================
// Extraction and Formatting
// ============================================================================

mod extraction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_statblock_tsv() {
        let tsv = convert_text(STATBLOCK, &TsvOptions::default(), Some(SourceFormat::Markdown));
        assert!(tsv.starts_with("# Defense\n\nAC\tHP\tSaves\n"));
        assert!(tsv.contains("# Offense\n\nMelee\tRanged\n"));
        assert!(!tsv.contains("not\ta table"));
    }

    #[test]
    fn test_html_statblock_tsv() {
        let html = r#"
            <html><body>
            <h2>Goblin</h2>
            <table>
              <tr><th colspan="2">Defense</th></tr>
              <tr><td>AC</td><td>16, touch&nbsp;13</td></tr>
              <tr><td>hp</td><td>6<br>(1d10+1)</td></tr>
            </table>
            </body></html>"#;
        let tsv = convert_text(html, &TsvOptions::default(), None);
        assert_eq!(
            tsv,
            "# Table 1\n\nDefense\t\nAC\t16, touch 13\nhp\t6 (1d10+1)\n"
        );
    }

    #[test]
    fn test_markdown_rendering_of_html_tables() {
        let html = "<table><tr><td>Str</td><td>Dex</td></tr><tr><td>14</td><td>13</td></tr></table>";
        let tables = extract_tables(html.as_bytes(), SourceFormat::Html).unwrap();
        assert_eq!(
            format_as_markdown(&tables),
            "## Table 1\n\n| Str | Dex |\n| --- | --- |\n| 14 | 13 |\n"
        );
    }

    #[test]
    fn test_no_headers_option() {
        let tables = extract_tables(b"| a | b |\n| c |", SourceFormat::Markdown).unwrap();
        let opts = TsvOptions {
            include_headers: false,
            normalize_columns: false,
        };
        assert_eq!(format_as_tsv(&tables, &opts), "a\tb\nc\n");
    }

    #[test]
    fn test_docx_rejects_garbage() {
        assert!(extract_tables(b"not a zip", SourceFormat::Docx).is_err());
    }
}

// ============================================================================
// Files and Sinks
// ============================================================================

mod output {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_inline_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("warchief.md");
        fs::write(&input, STATBLOCK).unwrap();

        let text = files::read_text(Some(input.as_path())).unwrap();
        let result = convert_tables_inline(&text);

        let out_path = files::inline_output_path(&input);
        assert_eq!(out_path, dir.path().join("warchief_inline.md"));

        let mut sink = FileSink::new(&out_path);
        sink.write_output(&result.text).unwrap();
        assert_eq!(fs::read_to_string(&out_path).unwrap(), result.text);
        assert_eq!(sink.path(), out_path.as_path());
    }

    #[test]
    fn test_per_table_paths_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("tables.txt");
        let tables = extract_tables(STATBLOCK.as_bytes(), SourceFormat::Markdown).unwrap();

        for (i, table) in tables.iter().enumerate() {
            let path = files::per_table_path(&base, i + 1, ".txt");
            FileSink::new(&path)
                .write_output(&format_as_tsv(std::slice::from_ref(table), &TsvOptions::plain()))
                .unwrap();
        }

        let first = fs::read_to_string(dir.path().join("tables_table1.txt")).unwrap();
        assert!(first.starts_with("AC\tHP\tSaves"));
        assert!(dir.path().join("tables_table2.txt").exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = files::read_text(Some(dir.path().join("absent.md").as_path())).unwrap_err();
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_memory_sink_collects_output() {
        let mut sink = MemorySink::new();
        let result = convert_tables_inline("| x | y |\n| --- | --- |\n");
        sink.write_output(&result.text).unwrap();
        assert_eq!(sink.contents(), "x\ty\n");
    }
}
