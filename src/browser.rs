// src/browser.rs
use std::process::Command;
use std::time::Duration;

/// Delay before launching the browser, so the listener is up first.
pub const LAUNCH_DELAY: Duration = Duration::from_millis(300);

/// Program and arguments that open `url` in the default browser.
pub fn launch_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Starts the platform's URL opener without waiting on it.
pub fn open(url: &str) -> std::io::Result<()> {
    let (program, args) = launch_command(url);
    Command::new(program).args(&args).spawn().map(|_| ())
}

/// Opens `url` once after [`LAUNCH_DELAY`]. Must be called from within the
/// actix runtime. Failures are not reported.
pub fn open_after_delay(url: String) {
    actix_rt::spawn(async move {
        tokio::time::sleep(LAUNCH_DELAY).await;
        if let Err(e) = open(&url) {
            log::debug!("Could not open browser at {}: {}", url, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_command_passes_url_last() {
        let url = "http://127.0.0.1:18080/";
        let (program, args) = launch_command(url);
        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some(url));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_uses_xdg_open() {
        let (program, args) = launch_command("http://localhost/");
        assert_eq!(program, "xdg-open");
        assert_eq!(args.len(), 1);
    }
}
