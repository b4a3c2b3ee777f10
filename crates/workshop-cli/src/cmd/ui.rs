use anyhow::Result;
use std::path::Path;

/// Start the web UI server, blocking until Ctrl-C.
pub fn run(root: &Path, port: u16, no_open: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Workshop UI → http://localhost:{actual_port}");

        tokio::select! {
            res = workshop_server::serve_on(root_buf, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
