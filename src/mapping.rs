//! Line-oriented mapping file codec.
//!
//! ```text
//! img/food/plate.png food
//! >img/food/icons8-french-fries-96.png french fries
//! >img/food/icons8-watermelon-96.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/collaredshirt.png collared shirt
//! ```
//!
//! A category line is `<image> <name>`; an item line is `><image> <text>` and
//! belongs to the category declared above it. Only the first space splits, so
//! names and texts may contain spaces. Blank lines are skipped. Anything else
//! aborts the load with [`MappingError::Malformed`].
//!
//! Writing checks every record first and fails with
//! [`MappingError::Unencodable`] before touching the file if any value could
//! not be read back unchanged.

use std::path::Path;

use crate::config::DuplicatePolicy;
use crate::error::{AacResult, MappingError, MappingResult};
use crate::mapper::{CategoryMapper, Record};

/// Marks an item line.
pub const ITEM_PREFIX: char = '>';

/// Parse one line. Blank lines yield `Ok(None)`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> MappingResult<Option<Record>> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (is_item, body) = match line.strip_prefix(ITEM_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let malformed = |message: &str| MappingError::Malformed {
        line: line_no,
        message: message.to_string(),
    };

    let (image_loc, value) = body
        .split_once(' ')
        .ok_or_else(|| malformed("expected an image location, a space, then text"))?;
    if image_loc.is_empty() {
        return Err(malformed("image location is empty"));
    }

    if is_item {
        Ok(Some(Record::Item {
            image_loc: image_loc.to_string(),
            text: value.to_string(),
        }))
    } else if value.is_empty() {
        Err(malformed("category name is empty"))
    } else {
        Ok(Some(Record::Category {
            image_loc: image_loc.to_string(),
            name: value.to_string(),
        }))
    }
}

/// Parse a whole mapping document into records, in file order.
pub fn load_records(source: &str) -> MappingResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut seen_category = false;

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let Some(record) = parse_line(line, line_no)? else {
            continue;
        };
        match &record {
            Record::Category { .. } => seen_category = true,
            Record::Item { image_loc, .. } if !seen_category => {
                return Err(MappingError::Malformed {
                    line: line_no,
                    message: format!("item \"{image_loc}\" appears before any category"),
                });
            }
            Record::Item { .. } => {}
        }
        records.push(record);
    }

    Ok(records)
}

/// Render a single record as a mapping line (no trailing newline).
pub fn render_record(record: &Record) -> String {
    match record {
        Record::Category { image_loc, name } => format!("{image_loc} {name}"),
        Record::Item { image_loc, text } => format!("{ITEM_PREFIX}{image_loc} {text}"),
    }
}

/// Check that `record` renders to a line that parses back to the same record.
pub fn check_encodable(record: &Record) -> MappingResult<()> {
    let (image_loc, value, is_category) = match record {
        Record::Category { image_loc, name } => (image_loc, name, true),
        Record::Item { image_loc, text } => (image_loc, text, false),
    };
    let unencodable = |message: &str| MappingError::Unencodable {
        image_loc: image_loc.clone(),
        message: message.to_string(),
    };
    let has_line_break = |s: &str| s.contains(['\n', '\r']);

    if image_loc.is_empty() {
        return Err(unencodable("image location is empty"));
    }
    if image_loc.contains(' ') {
        return Err(unencodable("image location contains a space"));
    }
    if has_line_break(image_loc.as_str()) {
        return Err(unencodable("image location contains a line break"));
    }
    if is_category && image_loc.starts_with(ITEM_PREFIX) {
        return Err(unencodable("category image location starts with `>`"));
    }
    if is_category && value.is_empty() {
        return Err(unencodable("category name is empty"));
    }
    if has_line_break(value.as_str()) {
        return Err(unencodable("text contains a line break"));
    }
    Ok(())
}

/// Render the board as mapping lines, following in-memory order.
///
/// Fails without rendering anything if any record cannot be encoded.
pub fn render_records(mapper: &CategoryMapper) -> AacResult<Vec<String>> {
    let records = mapper.records()?;
    for record in &records {
        check_encodable(record)?;
    }
    Ok(records.iter().map(render_record).collect())
}

/// Parse a mapping document and build a board from it.
pub fn load_str(source: &str, duplicates: DuplicatePolicy) -> AacResult<CategoryMapper> {
    let records = load_records(source)?;
    CategoryMapper::from_records(records, duplicates)
}

/// Load a board from a mapping file.
pub fn load_file(path: &Path, duplicates: DuplicatePolicy) -> AacResult<CategoryMapper> {
    let content = std::fs::read_to_string(path).map_err(|e| MappingError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read mapping file");
    load_str(&content, duplicates)
}

/// Write the board to a mapping file, replacing any existing content.
pub fn write_file(mapper: &CategoryMapper, path: &Path) -> AacResult<()> {
    let lines = render_records(mapper)?;
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    std::fs::write(path, content).map_err(|e| MappingError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), lines = lines.len(), "wrote mapping file");
    Ok(())
}
