pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initializes test logging; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
