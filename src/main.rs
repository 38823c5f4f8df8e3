use plansheet::ui::app::App;

fn main() {
    env_logger::init();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("PlanSheet")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0)),
            ),
        )
        .launch(App);
}
