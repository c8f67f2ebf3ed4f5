use std::sync::Once;


/// Installs a fmt subscriber once so `RUST_LOG=debug` surfaces the rescan
/// events while debugging a failing test.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
