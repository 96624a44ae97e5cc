//! Client-side CSV export: builds the file in memory and hands it to the
//! browser as a blob download. No server round trip.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written out as CSV rows.
pub trait CsvExportable {
    /// Column headers, in row order.
    fn headers() -> Vec<&'static str>;

    /// One row of cell values for this record.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Renders the header row plus one line per record, comma-delimited.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Exports the records as a CSV file and triggers a browser download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)
}

/// Cells containing the delimiter, quotes or line breaks get quoted, with
/// inner quotes doubled.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Downloads the blob through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["name", "value"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn builds_header_and_rows() {
        let csv = build_csv(&[Row("alpha", 1.5), Row("beta", 2.0)]);
        assert_eq!(csv, "name,value\nalpha,1.50\nbeta,2.00\n");
    }

    #[test]
    fn empty_data_still_has_header() {
        let csv = build_csv::<Row>(&[]);
        assert_eq!(csv, "name,value\n");
    }

    #[test]
    fn escapes_delimiters_and_quotes() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn quoted_cells_survive_in_rows() {
        let csv = build_csv(&[Row("NY, USA", 3.0)]);
        assert_eq!(csv, "name,value\n\"NY, USA\",3.00\n");
    }
}
