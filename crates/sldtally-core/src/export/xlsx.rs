//! Minimal Office Open XML writer for a single worksheet of text cells.

use crate::error::SldError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const SHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const WORKSHEET_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";

const WORKBOOK_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const WORKSHEET_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const RELS_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Build a workbook with one sheet. The first row is written as given,
/// so callers put the header row first.
pub fn workbook_bytes(sheet_name: &str, rows: &[Vec<String>]) -> Result<Vec<u8>, SldError> {
    validate_sheet_name(sheet_name)?;

    let parts: [(&str, Vec<u8>); 5] = [
        ("[Content_Types].xml", content_types_xml()?),
        ("_rels/.rels", root_rels_xml()?),
        ("xl/workbook.xml", workbook_xml(sheet_name)?),
        ("xl/_rels/workbook.xml.rels", workbook_rels_xml()?),
        ("xl/worksheets/sheet1.xml", worksheet_xml(rows)?),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, body) in &parts {
        zip.start_file(*name, options)
            .map_err(|e| SldError::Export(format!("cannot add {name}: {e}")))?;
        zip.write_all(body)?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| SldError::Export(format!("cannot finish workbook: {e}")))?;

    Ok(cursor.into_inner())
}

/// Excel rejects names that are empty, longer than 31 characters, or
/// contain any of `[]:*?/\`.
pub fn validate_sheet_name(name: &str) -> Result<(), SldError> {
    let len = name.chars().count();
    if len == 0 || len > 31 {
        return Err(SldError::Export(format!(
            "sheet name must be 1 to 31 characters, got {len}"
        )));
    }
    if let Some(c) = name.chars().find(|c| "[]:*?/\\".contains(*c)) {
        return Err(SldError::Export(format!(
            "sheet name '{name}' contains invalid character '{c}'"
        )));
    }
    Ok(())
}

/// Spreadsheet column letters for a 0-based index: 0 -> "A", 26 -> "AA".
pub fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

fn worksheet_xml(rows: &[Vec<String>]) -> Result<Vec<u8>, SldError> {
    let mut w = xml_writer()?;
    emit(
        &mut w,
        Event::Start(BytesStart::new("worksheet").with_attributes([("xmlns", SHEET_NS)])),
    )?;
    emit(&mut w, Event::Start(BytesStart::new("sheetData")))?;

    for (row_index, row) in rows.iter().enumerate() {
        let row_number = (row_index + 1).to_string();
        emit(
            &mut w,
            Event::Start(BytesStart::new("row").with_attributes([("r", row_number.as_str())])),
        )?;
        for (col_index, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", column_letters(col_index), row_number);
            emit(
                &mut w,
                Event::Start(
                    BytesStart::new("c")
                        .with_attributes([("r", cell_ref.as_str()), ("t", "inlineStr")]),
                ),
            )?;
            emit(&mut w, Event::Start(BytesStart::new("is")))?;
            emit(
                &mut w,
                Event::Start(BytesStart::new("t").with_attributes([("xml:space", "preserve")])),
            )?;
            emit(&mut w, Event::Text(BytesText::new(value)))?;
            emit(&mut w, Event::End(BytesEnd::new("t")))?;
            emit(&mut w, Event::End(BytesEnd::new("is")))?;
            emit(&mut w, Event::End(BytesEnd::new("c")))?;
        }
        emit(&mut w, Event::End(BytesEnd::new("row")))?;
    }

    emit(&mut w, Event::End(BytesEnd::new("sheetData")))?;
    emit(&mut w, Event::End(BytesEnd::new("worksheet")))?;
    Ok(w.into_inner())
}

fn workbook_xml(sheet_name: &str) -> Result<Vec<u8>, SldError> {
    let mut w = xml_writer()?;
    emit(
        &mut w,
        Event::Start(
            BytesStart::new("workbook").with_attributes([("xmlns", SHEET_NS), ("xmlns:r", REL_NS)]),
        ),
    )?;
    emit(&mut w, Event::Start(BytesStart::new("sheets")))?;
    emit(
        &mut w,
        Event::Empty(BytesStart::new("sheet").with_attributes([
            ("name", sheet_name),
            ("sheetId", "1"),
            ("r:id", "rId1"),
        ])),
    )?;
    emit(&mut w, Event::End(BytesEnd::new("sheets")))?;
    emit(&mut w, Event::End(BytesEnd::new("workbook")))?;
    Ok(w.into_inner())
}

fn workbook_rels_xml() -> Result<Vec<u8>, SldError> {
    relationships_xml(WORKSHEET_REL, "worksheets/sheet1.xml")
}

fn root_rels_xml() -> Result<Vec<u8>, SldError> {
    relationships_xml(OFFICE_DOCUMENT_REL, "xl/workbook.xml")
}

fn relationships_xml(rel_type: &str, target: &str) -> Result<Vec<u8>, SldError> {
    let mut w = xml_writer()?;
    emit(
        &mut w,
        Event::Start(BytesStart::new("Relationships").with_attributes([("xmlns", PKG_REL_NS)])),
    )?;
    emit(
        &mut w,
        Event::Empty(BytesStart::new("Relationship").with_attributes([
            ("Id", "rId1"),
            ("Type", rel_type),
            ("Target", target),
        ])),
    )?;
    emit(&mut w, Event::End(BytesEnd::new("Relationships")))?;
    Ok(w.into_inner())
}

fn content_types_xml() -> Result<Vec<u8>, SldError> {
    let mut w = xml_writer()?;
    emit(
        &mut w,
        Event::Start(BytesStart::new("Types").with_attributes([("xmlns", CONTENT_TYPES_NS)])),
    )?;
    emit(
        &mut w,
        Event::Empty(
            BytesStart::new("Default")
                .with_attributes([("Extension", "rels"), ("ContentType", RELS_TYPE)]),
        ),
    )?;
    emit(
        &mut w,
        Event::Empty(
            BytesStart::new("Default")
                .with_attributes([("Extension", "xml"), ("ContentType", "application/xml")]),
        ),
    )?;
    emit(
        &mut w,
        Event::Empty(BytesStart::new("Override").with_attributes([
            ("PartName", "/xl/workbook.xml"),
            ("ContentType", WORKBOOK_TYPE),
        ])),
    )?;
    emit(
        &mut w,
        Event::Empty(BytesStart::new("Override").with_attributes([
            ("PartName", "/xl/worksheets/sheet1.xml"),
            ("ContentType", WORKSHEET_TYPE),
        ])),
    )?;
    emit(&mut w, Event::End(BytesEnd::new("Types")))?;
    Ok(w.into_inner())
}

fn xml_writer() -> Result<Writer<Vec<u8>>, SldError> {
    let mut w = Writer::new(Vec::new());
    emit(
        &mut w,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )?;
    Ok(w)
}

fn emit(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SldError> {
    w.write_event(event)
        .map_err(|e| SldError::Export(format!("xml write failed: {e}")))
}
