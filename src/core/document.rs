//! Document shells for the export and print adapters.

use chrono::{Datelike, Local};
use html_escape::encode_text;

use super::render::SafeHtml;

/// HTML shell for the `.doc` export. The label is best-effort: word
/// processors open the file as an HTML document.
pub fn word_document(title: &str, content: &SafeHtml) -> String {
    format!(
        r#"<html>
    <head>
        <meta charset="UTF-8">
        <title>{title}</title>
        <style>
            body {{ font-family: Arial, sans-serif; }}
            h1 {{ text-align: center; }}
            p {{ margin: 10px 0; }}
        </style>
    </head>
    <body>
        <h1>{title}</h1>
        <p>{content}</p>
    </body>
</html>
"#,
        title = encode_text(title),
        content = content
    )
}

/// Print-ready page; the user triggers printing from the browser.
pub fn print_document(title: &str, content: &SafeHtml) -> String {
    format!(
        "<html><head><title>설교 출력</title></head><body><h1>{}</h1><div>{}</div></body></html>\n",
        encode_text(title),
        content
    )
}

/// The generated file-name string: a metadata summary plus the date.
pub fn suggested_file_name(topic: &str, verse: &str, audience: &str, length_minutes: u32) -> String {
    let today = Local::now();
    format!(
        "제목: {} | 성경구절: {} | 대상: {} | 분량: {}분 | 작성일: ({}. {}. {})",
        topic,
        verse,
        audience,
        length_minutes,
        today.year(),
        today.month(),
        today.day()
    )
}
