//! Excel出力の統合テスト
//!
//! 生成したファイルを calamine で読み戻してレイアウトを検証する

use attendance_common::{AttendanceReport, CourseInfo, Participation, ReportRow};
use attendance_report::export::{export_report, report_file_name};
use attendance_report::error::ReportError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use regex::Regex;
use std::io::Read;
use std::path::Path;
use tempfile::tempdir;
use zip::ZipArchive;

fn create_test_report() -> AttendanceReport {
    AttendanceReport {
        course: CourseInfo {
            id: 4821,
            name: "Diplomado en Ciencia de Datos".to_string(),
            account_id: 37,
        },
        rows: vec![
            ReportRow {
                first_names: "John".to_string(),
                last_name: "Smith".to_string(),
                matched_name: Some("John Smith".to_string()),
                participation: Participation::Participated,
            },
            ReportRow {
                first_names: "María".to_string(),
                last_name: "García".to_string(),
                matched_name: None,
                participation: Participation::NotParticipated,
            },
            ReportRow {
                first_names: "Ana María".to_string(),
                last_name: "López".to_string(),
                matched_name: Some("Ana".to_string()),
                participation: Participation::NotParticipated,
            },
        ],
        unused_names: vec!["Johnny Smithers".to_string()],
    }
}

fn text(value: Option<&Data>) -> String {
    match value {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[test]
fn test_export_into_directory_uses_course_file_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = create_test_report();

    let path = export_report(&report, dir.path()).expect("Excel生成に失敗");

    assert_eq!(path, dir.path().join("Diplomado en Ciencia de Datos-4821.xlsx"));
    assert!(path.exists(), "Excelファイルが作成されていない");
}

#[test]
fn test_export_to_explicit_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("nested").join("asistencia.xlsx");

    let path = export_report(&create_test_report(), &target).expect("Excel生成に失敗");

    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_export_layout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = create_test_report();
    let path = export_report(&report, dir.path()).expect("Excel生成に失敗");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("Excelを開けない");
    let range = workbook
        .worksheet_range("Asistencia")
        .expect("Asistencia シートがない");

    // 見出し2行 + 空行
    assert_eq!(
        text(range.get_value((0, 0))),
        "Diplomado: Diplomado en Ciencia de Datos (ID: 4821)"
    );
    assert_eq!(text(range.get_value((1, 0))), "Subcuenta: 37");
    assert_eq!(text(range.get_value((2, 0))), "");

    // データ行
    assert_eq!(text(range.get_value((3, 0))), "John");
    assert_eq!(text(range.get_value((3, 1))), "Smith");
    assert_eq!(text(range.get_value((3, 2))), "John Smith");
    assert_eq!(text(range.get_value((3, 3))), "Participo");

    assert_eq!(text(range.get_value((4, 0))), "María");
    assert_eq!(text(range.get_value((4, 2))), "");
    assert_eq!(text(range.get_value((4, 3))), "No Participo");

    // レビューで不参加にされた行は照合名を残したまま不参加
    assert_eq!(text(range.get_value((5, 2))), "Ana");
    assert_eq!(text(range.get_value((5, 3))), "No Participo");

    assert_eq!(range.height(), 3 + report.rows.len());
}

/// xlsx内のXMLパーツを文字列で読む
fn read_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).expect("xlsxを開けない");
    let mut archive = ZipArchive::new(file).expect("zipとして読めない");
    let mut part = archive.by_name(name).expect("パーツがない");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("XMLを読めない");
    xml
}

/// `<fonts>` などのコレクションを要素ごとに分割
fn collection_items(xml: &str, collection: &str, item: &str) -> Vec<String> {
    let start = xml
        .find(&format!("<{} ", collection))
        .unwrap_or_else(|| panic!("<{}> がない", collection));
    let end = start
        + xml[start..]
            .find(&format!("</{}>", collection))
            .unwrap_or_else(|| panic!("</{}> がない", collection));
    let body = &xml[start..end];
    let body = &body[body.find('>').unwrap() + 1..];

    let closing = format!("</{}>", item);
    let open_tag = format!("<{}", item);
    body.split(&format!("<{}", item))
        .skip(1)
        .map(|chunk| format!("{}{}", open_tag, chunk.split(&closing).next().unwrap()))
        .collect()
}

fn attr(tag: &str, name: &str) -> usize {
    let re = Regex::new(&format!(r#"\b{}="(\d+)""#, name)).unwrap();
    re.captures(tag)
        .map(|c| c[1].parse().unwrap())
        .unwrap_or(0)
}

/// セルに適用された書式
struct CellStyle {
    font: String,
    fill: String,
    border: String,
}

struct Styles {
    sheet: String,
    xfs: Vec<String>,
    fonts: Vec<String>,
    fills: Vec<String>,
    borders: Vec<String>,
}

impl Styles {
    fn load(path: &Path) -> Self {
        let styles = read_part(path, "xl/styles.xml");
        let cell_xfs = {
            let start = styles.find("<cellXfs").expect("<cellXfs> がない");
            let end = styles.find("</cellXfs>").expect("</cellXfs> がない");
            styles[start..end].to_string()
        };
        Self {
            sheet: read_part(path, "xl/worksheets/sheet1.xml"),
            xfs: cell_xfs
                .split("<xf ")
                .skip(1)
                .map(|s| s.to_string())
                .collect(),
            fonts: collection_items(&styles, "fonts", "font"),
            fills: collection_items(&styles, "fills", "fill"),
            borders: collection_items(&styles, "borders", "border"),
        }
    }

    fn cell(&self, cell_ref: &str) -> CellStyle {
        let re = Regex::new(&format!(r#"<c r="{}"[^>]*>"#, cell_ref)).unwrap();
        let tag = re
            .find(&self.sheet)
            .unwrap_or_else(|| panic!("セル {} がない", cell_ref))
            .as_str();
        let xf = &self.xfs[attr(tag, "s")];
        CellStyle {
            font: self.fonts[attr(xf, "fontId")].clone(),
            fill: self.fills[attr(xf, "fillId")].clone(),
            border: self.borders[attr(xf, "borderId")].clone(),
        }
    }
}

#[test]
fn test_export_formatting() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = export_report(&create_test_report(), dir.path()).expect("Excel生成に失敗");
    let styles = Styles::load(&path);

    // 見出しは太字
    assert!(styles.cell("A1").font.contains("<b/>"));
    assert!(styles.cell("A2").font.contains("<b/>"));
    assert!(!styles.cell("A4").font.contains("<b/>"));

    // データ行は4セルとも細罫線
    for row in 4..=6 {
        for col in ["A", "B", "C", "D"] {
            let border = styles.cell(&format!("{}{}", col, row)).border;
            for side in ["left", "right", "top", "bottom"] {
                assert!(
                    border.contains(&format!(r#"<{} style="thin""#, side)),
                    "{}{} の {} に細罫線がない",
                    col,
                    row,
                    side
                );
            }
        }
    }

    // 参加セルは緑、不参加セルは赤
    assert!(styles.cell("D4").fill.contains("FF27AE60"));
    assert!(styles.cell("D5").fill.contains("FFCB4821"));
    assert!(styles.cell("D6").fill.contains("FFCB4821"));
    assert!(!styles.cell("C4").fill.contains("rgb="));

    // 4列とも幅30
    assert!(styles.sheet.contains(r#"<col min="1" max="4" width="30.7"#));
}

#[test]
fn test_export_rejects_non_xlsx_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("asistencia.csv");

    let err = export_report(&create_test_report(), &target).unwrap_err();

    assert!(matches!(err, ReportError::InvalidOutputPath(_)));
    assert!(!target.exists());
}

#[test]
fn test_export_empty_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = AttendanceReport {
        course: CourseInfo {
            id: 1,
            name: "Vacío".to_string(),
            account_id: 1,
        },
        ..Default::default()
    };

    let result = export_report(&report, dir.path());

    assert!(result.is_ok(), "空のExcel生成に失敗: {:?}", result.err());
}

#[test]
fn test_report_file_name_pattern() {
    assert_eq!(report_file_name("Curso", 7), "Curso-7.xlsx");
}
