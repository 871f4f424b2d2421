use thiserror::Error;

/// Reasons the site server can fail to come up or keep running.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("couldn't read leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}
