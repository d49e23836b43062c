use lg_web::app_root::app_root;

fn main() {
    lg_web::app::logging::init();
    dioxus::launch(app_root);
}
