use dioxus::prelude::*;
use shared_types::FeatureFlags;

pub mod acknowledgments;
pub mod badges;
mod components;
pub mod demo_store;
pub mod format_helpers;
pub mod notify;
mod routes;
pub mod session;

use routes::Route;
use session::SessionContext;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        if flags.records_db {
            // Fail soft: the portal runs on role labels if the store is down.
            if let Err(e) = server::db::get_db().await {
                tracing::warn!(error = %e, "records store unavailable at startup");
            }
        }

        let mut router = dioxus::server::router(App)
            .route("/health", axum::routing::get(server::health::health_check));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Flags default to "integrations off, demo login on" if the call fails.
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(SessionContext::browser);
    use_context_provider(|| shared_ui::theme::ThemeState {
        theme: Signal::new(shared_ui::theme::Theme::default()),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "portal-loading",
                        shared_ui::Spinner {}
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
