//! Built-in demo pages.

/// A page that posts `{"status": "success <index>"}` on `channel` once loaded.
pub fn status_page(channel: &str, index: u16) -> String {
    let channel_json = serde_json::to_string(channel).unwrap_or_else(|_| "\"logger\"".into());
    let message = serde_json::json!({ "status": format!("success {index}") }).to_string();
    let message_json = serde_json::to_string(&message).unwrap_or_else(|_| "\"\"".into());
    format!(
        r#"<html>
<head><title>Status {index}</title></head>
<body>
<h1>Status page {index}</h1>
<script>
window[{channel_json}].postMessage({message_json});
</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use webview_logger::extract_status;

    #[test]
    fn page_posts_on_channel() {
        let page = status_page("logger", 3);
        assert!(page.contains(r#"window["logger"].postMessage("#));
        assert!(page.contains("<title>Status 3</title>"));
    }

    #[test]
    fn posted_message_carries_status() {
        let page = status_page("logger", 2);
        let start = page.find(".postMessage(").unwrap() + ".postMessage(".len();
        let end = page[start..].find(");").unwrap() + start;
        let literal: String = serde_json::from_str(&page[start..end]).unwrap();
        assert_eq!(extract_status(&literal).unwrap(), "success 2");
    }
}
