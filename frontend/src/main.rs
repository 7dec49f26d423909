use frontend::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Starting SoftSell frontend");
    yew::Renderer::<App>::new().render();
}
