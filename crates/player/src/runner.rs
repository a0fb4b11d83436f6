use std::sync::Arc;

use crate::application::api::Api;
use crate::config::PlayerConfig;
use crate::ports::outbound::RawApiPort;

const WINDOW_TITLE: &str = "Rick and Morty Characters";

pub struct RunnerDeps {
    pub raw_api: Arc<dyn RawApiPort>,
    pub config: PlayerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { raw_api, config } = deps;

    let api = Api::new(raw_api);
    let (width, height) = config.shell.window_size();

    let window = dioxus_desktop::WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(dioxus_desktop::LogicalSize::new(width, height));
    let cfg = dioxus_desktop::Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(config.shell)
        .with_context(crate::ui::presentation::Services::new(api))
        .launch(crate::ui::app);
}
