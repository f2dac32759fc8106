//! Demonstrates the middleware inside a minimal request pipeline.
//!
//! Run with: `cargo run --example request_pipeline`
//!
//! The "framework" here has already parsed the request; the middleware
//! strips markup before the route handler renders a response.

use serde_json::{json, Value};
use xss_sanitizer::web::{RequestParts, XssSanitizerMiddleware};
use xss_sanitizer::{SanitizerConfig, Section};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Request Sanitizing Pipeline Demo ===\n");

    let middleware = XssSanitizerMiddleware::new(SanitizerConfig::default());

    println!("1. POST /10/user?age=<h1>30&userType=admin");
    let mut post = RequestParts::new("req-post-001");
    post.set_body(json!({
        "propertyToSanitize": "<script>hello</script>",
        "firstName": "firstname",
        "experience": "<body>7<body>",
    }));
    post.add_query_param("age", "<h1>30");
    post.add_query_param("userType", "admin");
    post.add_path_param("id", "10");
    post.add_path_param("kind", "user");

    let response = middleware.handle(&mut post, render);
    println!("   response: {response:#}\n");

    println!("2. GET /user?age=<script>30</script>&userType=admin");
    let mut get = RequestParts::new("req-get-002");
    get.add_query_param("age", "<script>30</script>");
    get.add_query_param("userType", "admin");

    let response = middleware.handle(&mut get, render);
    println!("   response: {response:#}\n");

    println!("3. Same GET with query sanitizing disabled");
    let body_only = XssSanitizerMiddleware::new(SanitizerConfig::default().with_sections([Section::Body]));
    let mut raw = RequestParts::new("req-get-003");
    raw.add_query_param("age", "<script>30</script>");

    let response = body_only.handle(&mut raw, render);
    println!("   response: {response:#}");
}

// Route handler: echoes what it was given
fn render(request: &mut RequestParts) -> Value {
    let section = |s: Section| request.section(s).cloned().map(Value::from).unwrap_or(Value::Null);
    json!({
        "body": section(Section::Body),
        "query": section(Section::Query),
        "params": section(Section::Params),
    })
}
