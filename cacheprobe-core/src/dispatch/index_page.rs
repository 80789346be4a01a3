/// Human-readable landing page.
pub(crate) fn render_index(total_requests: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Browser cache capacity test server</title></head>
<body>
<h1>Browser cache capacity test server</h1>
<p>Total image requests: {total_requests}</p>
<h2>Endpoints</h2>
<ul>
<li><a href="/cache-test">/cache-test</a> - default cache test (cached for one year)</li>
<li><a href="/cache-test/no-cache">/cache-test/no-cache</a> - caching disabled</li>
<li><a href="/cache-test/max-age/3600">/cache-test/max-age/3600</a> - cached for one hour</li>
<li><a href="/status">/status</a> - server status</li>
</ul>
<h2>Query parameters for /cache-test</h2>
<ul>
<li>maxAge: cache lifetime in seconds</li>
<li>cacheControl: full Cache-Control header value, takes precedence over maxAge</li>
</ul>
<p>Example: <a href="/cache-test?maxAge=86400">/cache-test?maxAge=86400</a> (cached for one day)</p>
</body>
</html>
"#
    )
}
