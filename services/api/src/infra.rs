use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// CLI text argument: literal text, or `@path` to read the file contents.
pub(crate) fn read_text_arg(raw: &str) -> Result<String, std::io::Error> {
    match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path.trim())),
        None => Ok(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(
            read_text_arg("Rust engineer").expect("literal"),
            "Rust engineer"
        );
    }

    #[test]
    fn at_prefix_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "hiring-intel-read-text-{}.txt",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(b"Python developer").expect("write temp file");

        let text = read_text_arg(&format!("@{}", path.display())).expect("reads file");
        assert_eq!(text, "Python developer");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_text_arg("@/definitely/not/here.txt").expect_err("missing file");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
