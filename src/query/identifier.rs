//! Post identifier extraction

/// Path segment preceding a post shortcode in a post URL
pub const POST_PATH_MARKER: &str = "/p/";

/// Extract a post shortcode from a post URL or a bare shortcode.
///
/// Anything containing `http` is treated as a URL: the shortcode is the text
/// after the last `/p/`, up to the next `/`. Anything else is returned as is.
/// No validation is done; malformed URLs give a wrong or empty shortcode.
pub fn extract_shortcode(url_or_shortcode: &str) -> String {
    if !url_or_shortcode.contains("http") {
        return url_or_shortcode.to_string();
    }

    let tail = url_or_shortcode
        .rsplit(POST_PATH_MARKER)
        .next()
        .unwrap_or_default();
    tail.split('/').next().unwrap_or_default().to_string()
}
