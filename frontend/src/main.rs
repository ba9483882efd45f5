//! Storefront application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let t0 = std::time::Instant::now();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::info!("{} {} -> {} ({}ms)", method, path, res.status(), t0.elapsed().as_millis());
                    res
                },
            )))
    });
}
