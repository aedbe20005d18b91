/// Экспорт списков в CSV, совместимый с Excel
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для типов, которые могут быть экспортированы в Excel
pub trait ExcelExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в массив значений для CSV
    fn to_csv_row(&self) -> Vec<String>;
}

/// Собирает CSV и отдаёт его браузеру как скачиваемый файл
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }
    save_file(&build_csv(data), "text/csv;charset=utf-8;", filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// CSV с разделителем `;` и UTF-8 BOM, чтобы Excel открывал файл без мастера импорта
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    // Если ячейка содержит разделитель (;), кавычки (") или перевод строки, оборачиваем в кавычки
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        // Удваиваем кавычки внутри значения
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn js_err(action: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> String {
    move |e| format!("{}: {:?}", action, e)
}

/// Временная ссылка на object URL: клик по ней запускает скачивание
fn save_file(content: &str, mime: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(js_err("create blob"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document is not available")?;
    let body = document.body().ok_or("Document has no body")?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_err("create object URL"))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err("create link"))?
        .dyn_into()
        .map_err(|e: web_sys::Element| js_err("cast link")(e.into()))?;
    link.set_href(&url);
    link.set_download(filename);

    body.append_child(&link).map_err(js_err("attach link"))?;
    link.click();
    let detached = body.remove_child(&link).map(|_| ());
    Url::revoke_object_url(&url).map_err(js_err("revoke object URL"))?;
    detached.map_err(js_err("detach link"))
}

/// Печать текущей страницы средствами браузера
pub fn print_page() -> Result<(), String> {
    web_sys::window()
        .ok_or("Window is not available")?
        .print()
        .map_err(js_err("print"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        note: &'static str,
    }

    impl ExcelExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_build_csv_with_bom_and_separator() {
        let csv = build_csv(&[Row {
            name: "John Doe",
            note: "Slim fit",
        }]);
        assert_eq!(csv, "\u{FEFF}Name;Note\nJohn Doe;Slim fit\n");
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
