// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{LessonExport, notify_export_success};
use crate::ui::messages::info;
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto column widths.
pub(crate) fn export_xlsx(lessons: &[LessonExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if lessons.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, lesson) in lessons.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        write_date_cell(worksheet, row, 0, &lesson.date, bg)?;
        write_text_cell(worksheet, row, 1, &lesson.kid, bg)?;
        write_amount_cell(worksheet, row, 2, &lesson.amount, bg)?;
        write_text_cell(worksheet, row, 3, &lesson.notes, bg)?;

        let values = [&lesson.date, &lesson.kid, &lesson.amount, &lesson.notes];
        for (col, v) in values.iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v.as_str()));
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Real Excel date when the text parses, plain text otherwise.
fn write_date_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let Some(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| excel_date(&d))
    else {
        return write_text_cell(ws, row, col, s, bg);
    };

    let fmt = band_format(bg).set_num_format("yyyy-mm-dd");
    ws.write_with_format(row, col, &date, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_amount_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let Ok(num) = s.parse::<f64>() else {
        return write_text_cell(ws, row, col, s, bg);
    };

    let fmt = band_format(bg)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);
    ws.write_with_format(row, col, num, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_text_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

fn excel_date(d: &NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(d.year()).ok()?;
    ExcelDateTime::from_ymd(year, d.month() as u8, d.day() as u8).ok()
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
