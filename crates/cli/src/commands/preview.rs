use anyhow::{Context, Result};
use axum::Router;
use chrono::Local;
use daily_math_core::SiteConfig;
use daily_math_generator::rebuild;
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Serve the site root locally for checking generated pages.
///
/// This command:
/// - Rebuilds index.html and sitemap.xml once
/// - Serves the site root as static files
/// - Watches `daily/` and rebuilds whenever a page is added or removed
pub async fn run(config: SiteConfig, port: u16) -> Result<()> {
    rebuild(&config, Local::now().date_naive()).context("Failed to rebuild site")?;

    let app = Router::new()
        .fallback_service(ServeDir::new(&config.root))
        .layer(TraceLayer::new_for_http());

    let watch_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_pages(watch_config).await {
            tracing::error!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Serving: {}", config.root.display());
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Rebuild whenever a page in `daily/` changes
async fn watch_pages(config: SiteConfig) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    let daily_dir = config.layout().daily_dir();
    watcher.watch(&daily_dir, RecursiveMode::NonRecursive)?;

    while let Some(event) = rx.recv().await {
        if !is_page_change(&event) {
            continue;
        }
        tracing::info!("Daily pages changed, rebuilding");
        if let Err(e) = rebuild(&config, Local::now().date_naive()) {
            tracing::error!("Rebuild failed: {}", e);
        }
    }

    Ok(())
}

fn is_page_change(event: &NotifyEvent) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_)
    ) && event.paths.iter().any(|p| is_page(p))
}

fn is_page(path: &Path) -> bool {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    !name.starts_with('.') && path.extension().and_then(|e| e.to_str()) == Some("html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::CreateKind;
    use std::path::PathBuf;

    #[test]
    fn test_is_page() {
        assert!(is_page(Path::new("daily/2024-01-01.html")));
        assert!(!is_page(Path::new("daily/2024-01-01.md")));
        assert!(!is_page(Path::new("daily/.2024-01-01.html")));
    }

    #[test]
    fn test_is_page_change() {
        let event = NotifyEvent::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("daily/2024-01-01.html"));
        assert!(is_page_change(&event));

        let event = NotifyEvent::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("daily/2024-01-01.md"));
        assert!(!is_page_change(&event));

        let event = NotifyEvent::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("daily/2024-01-01.html"));
        assert!(!is_page_change(&event));
    }
}
