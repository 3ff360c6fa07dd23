//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shelfie_core` linkage.
//! - Optionally probe the configured backend with `--probe`.

use shelfie_core::{AuthService, HttpGateway, ShelfieConfig};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from any frontend shell embedding the library.
    let config = ShelfieConfig::load();
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = shelfie_core::init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("shelfie_core ping={}", shelfie_core::ping());
    println!("shelfie_core version={}", shelfie_core::core_version());

    if std::env::args().any(|arg| arg == "--probe") {
        let auth = AuthService::new(HttpGateway::from_config(&config));
        match auth.hello() {
            Ok(body) => println!("backend {} reachable: {body}", config.api_base_url),
            Err(err) => eprintln!("backend {} unreachable: {err}", config.api_base_url),
        }
    }
}
