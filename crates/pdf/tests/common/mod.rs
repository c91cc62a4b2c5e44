//! Fixture PDFs built in memory with lopdf.
//!
//! Cells are laid out the way most producers write them: each cell's text is
//! its own positioned text object, and the grid is stroked as separate lines.

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, Stream};

const GRID_LEFT: f64 = 50.0;
const GRID_TOP: f64 = 740.0;
const COLUMN_WIDTH: f64 = 150.0;
const ROW_HEIGHT: f64 = 20.0;

/// What to draw on one fixture page.
pub enum FixturePage<'a> {
    /// A ruled grid, one text object per non-empty cell.
    Table(&'a [&'a [&'a str]]),
    /// Ruled grids stacked top to bottom.
    Tables(&'a [&'a [&'a [&'a str]]]),
    /// Free-standing lines of text without any rules.
    Prose(&'a [&'a str]),
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Content operators for a ruled grid whose top edge sits at `top`.
fn ruled_table(rows: &[&[&str]], top: f64) -> String {
    let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let right = GRID_LEFT + COLUMN_WIDTH * cols as f64;
    let bottom = top - ROW_HEIGHT * rows.len() as f64;
    let mut content = String::from("1 w\n");

    for r in 0..=rows.len() {
        let y = top - ROW_HEIGHT * r as f64;
        content.push_str(&format!("{GRID_LEFT} {y} m {right} {y} l S\n"));
    }
    for c in 0..=cols {
        let x = GRID_LEFT + COLUMN_WIDTH * c as f64;
        content.push_str(&format!("{x} {top} m {x} {bottom} l S\n"));
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let x = GRID_LEFT + COLUMN_WIDTH * c as f64 + 5.0;
            let y = top - ROW_HEIGHT * (r + 1) as f64 + 6.0;
            content.push_str(&format!(
                "BT /F1 10 Tf {x} {y} Td ({}) Tj ET\n",
                escape(text)
            ));
        }
    }
    content
}

fn prose(lines: &[&str]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let y = GRID_TOP - 14.0 * i as f64;
            format!("BT /F1 12 Tf 72 {y} Td ({}) Tj ET\n", escape(line))
        })
        .collect()
}

fn page_content(page: &FixturePage<'_>) -> String {
    match page {
        FixturePage::Table(rows) => ruled_table(rows, GRID_TOP),
        FixturePage::Tables(tables) => {
            let mut top = GRID_TOP;
            let mut content = String::new();
            for rows in *tables {
                content.push_str(&ruled_table(rows, top));
                top -= ROW_HEIGHT * (rows.len() + 2) as f64;
            }
            content
        }
        FixturePage::Prose(lines) => prose(lines),
    }
}

/// Build a PDF with one page per entry of `pages`.
pub fn build_pdf(pages: &[FixturePage<'_>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids = Vec::new();
    for page in pages {
        let stream = Stream::new(dictionary! {}, page_content(page).into_bytes());
        let content_id = doc.add_object(stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_ids.len() as i64),
    });

    for &page_id in &page_ids {
        if let Ok(dict) = doc.get_object_mut(page_id).and_then(Object::as_dict_mut) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

pub const RUBRIC_TABLE: &[&[&str]] = &[
    &["Criteria", "Weight", "Score"],
    &["Clarity", "20%", "4"],
    &["Depth", "30%", "5"],
];

/// Two pages: a ruled three-row rubric table, then prose only.
pub fn rubric_pdf() -> Vec<u8> {
    build_pdf(&[
        FixturePage::Table(RUBRIC_TABLE),
        FixturePage::Prose(&["Only a paragraph on this page."]),
    ])
}
