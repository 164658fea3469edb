//! Top bar with the backend connection status.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::config::{ApiConfig, APP_NAME};
use crate::services::{fetch_api_info, is_api_healthy, FetchTransport};

/// Numbers health probes so only the latest one may publish its result.
#[derive(Debug, Default)]
struct ProbeSequence {
    latest: Cell<u64>,
}

impl ProbeSequence {
    /// Start a probe, superseding every earlier one.
    fn start(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    fn is_current(&self, id: u64) -> bool {
        self.latest.get() == id
    }
}

/// Probe the backend and publish the outcome, unless a newer probe started meanwhile.
fn probe_backend(
    config: ApiConfig,
    sequence: Rc<ProbeSequence>,
    set_api_status: WriteSignal<Option<bool>>,
    set_api_version: WriteSignal<Option<String>>,
) {
    let id = sequence.start();
    set_api_status.set(None);
    set_api_version.set(None);

    spawn_local(async move {
        let transport = FetchTransport::from_config(&config);
        let healthy = is_api_healthy(&transport, &config).await;
        if !sequence.is_current(id) {
            log::debug!("Dropping result of superseded health probe #{}", id);
            return;
        }
        set_api_status.set(Some(healthy));

        if healthy {
            match fetch_api_info(&transport, &config).await {
                Ok(info) if sequence.is_current(id) => set_api_version.set(Some(info.version)),
                Ok(_) => {}
                Err(e) => log::warn!("Could not fetch API info: {}", e),
            }
        }
    });
}

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let environment = config.environment();
    let sequence = Rc::new(ProbeSequence::default());

    // None while a probe is in flight
    let (api_status, set_api_status) = create_signal(None::<bool>);
    let (api_version, set_api_version) = create_signal(None::<String>);

    probe_backend(config.clone(), sequence.clone(), set_api_status, set_api_version);

    let on_status_click = move |_| {
        log::info!("🔄 Re-checking API health...");
        probe_backend(config.clone(), sequence.clone(), set_api_status, set_api_version);
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge" class:production=environment.is_production()>
                    {environment.label()}
                </span>
            </div>
            <div class="header-right">
                <div
                    class="api-status"
                    class:connected=move || api_status.get() == Some(true)
                    on:click=on_status_click
                    style="cursor: pointer;"
                    title="Click to check again"
                >
                    <span class="api-dot" class:connected=move || api_status.get() == Some(true)></span>
                    <span>
                        {move || match (api_status.get(), api_version.get()) {
                            (None, _) => "Checking API...".to_string(),
                            (Some(true), Some(version)) => format!("API v{}", version),
                            (Some(true), None) => "API online".to_string(),
                            (Some(false), _) => "API offline".to_string(),
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
