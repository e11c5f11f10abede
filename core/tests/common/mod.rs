//! Shared setup for the fixture-driven suites.
//!
//! When `FAKEREST_API_URL` is set the suites run against that service using
//! `Settings::load()`. Otherwise each test starts its own mock server on a
//! random port, so tests never share state.

#![allow(dead_code)]

use fakerest_core::{Fixtures, Settings};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn settings() -> Settings {
    init_tracing();
    if std::env::var("FAKEREST_API_URL").is_ok() {
        return Settings::load().expect("invalid FAKEREST_* settings");
    }

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    Settings::new(&format!("http://{addr}"))
}

pub fn fixtures() -> Fixtures {
    Fixtures::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures"))
}
