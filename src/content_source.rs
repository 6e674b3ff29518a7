use url::Url;

use crate::{shell_config::ShellConfig, APP_INDEX_FILE, APP_SCHEME};

/// Where the front end comes from: a live development endpoint, or the
/// packaged resource served through the privileged scheme. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentSource {
    DevServer(Url),
    PackagedApp,
}

pub(crate) fn select_content_source(config: &ShellConfig) -> ContentSource {
    if config.dev_mode {
        if let Some(url) = &config.dev_server_url {
            return ContentSource::DevServer(url.clone());
        }
    }
    ContentSource::PackagedApp
}

/// The inspection tool opens automatically only for a live endpoint outside
/// automated test runs.
pub(crate) fn should_auto_open_devtools(config: &ShellConfig, source: &ContentSource) -> bool {
    matches!(source, ContentSource::DevServer(_)) && !config.test_mode
}

pub(crate) fn startup_url(source: &ContentSource) -> Url {
    match source {
        ContentSource::DevServer(url) => url.clone(),
        ContentSource::PackagedApp => packaged_index_url(),
    }
}

/// Windows webviews expose custom schemes as `http://<scheme>.localhost`.
pub(crate) fn packaged_index_url() -> Url {
    let raw = if cfg!(windows) {
        format!("http://{APP_SCHEME}.localhost/{APP_INDEX_FILE}")
    } else {
        format!("{APP_SCHEME}://localhost/{APP_INDEX_FILE}")
    };
    Url::parse(&raw).expect("packaged app url is statically valid")
}
