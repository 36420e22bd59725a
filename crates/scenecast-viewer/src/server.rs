use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tiny_http::{Header, Request, Response, Server};
use tracing::{info, warn};

/// Cancellation handle for a running `StaticServer` loop.
#[derive(Clone, Debug)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Static file server over the scene output directory.
pub struct StaticServer {
    server: Server,
    root: PathBuf,
    stop: Arc<AtomicBool>,
}

impl StaticServer {
    pub fn bind(root: impl Into<PathBuf>, port: u16) -> Result<Self> {
        let root = root.into();
        let server = Server::http(("0.0.0.0", port))
            .map_err(|err| anyhow!("bind http server on port {port}: {err}"))?;
        info!(root = %root.display(), port, "serving scene directory");
        Ok(Self {
            server,
            root,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle(self.stop.clone())
    }

    /// Serve requests until the shutdown handle fires. The flag is polled
    /// between requests, so shutdown takes effect within one poll interval.
    pub fn serve(&self) -> Result<()> {
        while !self.stop.load(Ordering::SeqCst) {
            if let Some(request) = self.server.recv_timeout(Duration::from_millis(200))? {
                self.respond(request);
            }
        }
        Ok(())
    }

    fn respond(&self, request: Request) {
        let url = request.url().to_string();
        let file_path = if url == "/" {
            self.root.join("index.html")
        } else {
            self.root.join(url.trim_start_matches('/'))
        };

        if url.contains("..") || !file_path.is_file() {
            let response = Response::from_string("404 Not Found").with_status_code(404);
            if let Err(err) = request.respond(response) {
                warn!(%url, "failed to respond: {err}");
            }
            return;
        }

        match std::fs::read(&file_path) {
            Ok(data) => {
                let response = Response::from_data(data);
                let response = match Header::from_bytes(&b"Content-Type"[..], content_type(&url)) {
                    Ok(header) => response.with_header(header),
                    Err(()) => response,
                };
                if let Err(err) = request.respond(response) {
                    warn!(%url, "failed to respond: {err}");
                }
            }
            Err(err) => {
                warn!(path = %file_path.display(), "read failed: {err}");
                let response = Response::from_string("404 Not Found").with_status_code(404);
                let _ = request.respond(response);
            }
        }
    }
}

fn content_type(url: &str) -> &'static str {
    if url == "/" || url.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if url.ends_with(".x3d") {
        "model/x3d+xml"
    } else if url.ends_with(".js") {
        "application/javascript"
    } else if url.ends_with(".css") {
        "text/css"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_cover_scene_artifacts() {
        assert_eq!(content_type("/"), "text/html; charset=utf-8");
        assert_eq!(content_type("/index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("/shp0a.x3d"), "model/x3d+xml");
        assert_eq!(content_type("/x3dom-full.js"), "application/javascript");
        assert_eq!(content_type("/unknown.bin"), "application/octet-stream");
    }
}
