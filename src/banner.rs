// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
  ____ _____ ____    _    _____
 / ___|_   _/ ___|  / \  | ____|
| |     | || |     / _ \ |  _|
| |___  | || |___ / ___ \| |___
 \____| |_| \____/_/   \_\_____|

    Local lab report grading
"#;
    println!("{}", banner);
}
