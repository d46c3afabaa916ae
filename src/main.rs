use log::info;

use nova_es::{config, App};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting NOVA ES site");
    yew::Renderer::<App>::new().render();
}
