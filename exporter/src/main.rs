#![deny(warnings)]
#![deny(rust_2018_idioms)]

use exporter::{settings::Settings, startup::App};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let settings = Settings::new().unwrap();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(settings.log_level)
            .finish(),
    )
    .unwrap();

    let app = App::build(&settings).unwrap();
    app.run().unwrap();
}
