//=========================================================================
// periodic-scene
//
// Opens the built-in twenty-element table in a window.
//
// Logging defaults to `info`; override with RUST_LOG, e.g.
//   RUST_LOG=viewer=trace,camera=trace periodic-scene
//
//=========================================================================

use log::error;
use periodic_scene::core::catalog::Catalog;
use periodic_scene::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = EngineBuilder::new()
        .build(Catalog::builtin_records())
        .map_err(Into::into)
        .and_then(|engine| engine.run());

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
