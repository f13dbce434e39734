use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use switchyard_http::Request;
use switchyard_routing::Dispatcher;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

/// HTTP/1.1 server over a shared dispatcher
pub struct HttpServer {
    pub dispatcher: Arc<Dispatcher>,
}

impl HttpServer {
    /// Create a new server around the given dispatcher
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use switchyard_routing::{Dispatcher, RouteTable};
    /// use switchyard_server::HttpServer;
    ///
    /// let dispatcher = Arc::new(Dispatcher::new(Arc::new(RouteTable::new())));
    /// let server = HttpServer::new(dispatcher);
    /// ```
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Bind the address and serve until an accept error occurs
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::net::SocketAddr;
    /// use std::sync::Arc;
    /// use switchyard_routing::{Dispatcher, RouteTable};
    /// use switchyard_server::HttpServer;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let dispatcher = Arc::new(Dispatcher::new(Arc::new(RouteTable::new())));
    /// let server = HttpServer::new(dispatcher);
    /// let addr: SocketAddr = "127.0.0.1:5000".parse()?;
    /// server.listen(addr).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn listen(self, addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(addr).await?;
        self.listen_on(listener).await
    }

    /// Serve on an already-bound listener
    ///
    /// Binding separately is what makes ephemeral-port setups work:
    /// bind to port 0, read the local address, then hand the listener
    /// over here.
    pub async fn listen_on(self, listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
        let addr = listener.local_addr()?;
        info!("listening on http://{addr}");

        loop {
            let (stream, socket_addr) = listener.accept().await?;
            let dispatcher = Arc::clone(&self.dispatcher);

            tokio::task::spawn(async move {
                if let Err(err) = Self::handle_connection(stream, dispatcher).await {
                    error!(%socket_addr, "connection error: {err}");
                }
            });
        }
    }

    /// Drive one TCP connection through hyper until the peer is done
    pub async fn handle_connection(
        stream: TcpStream,
        dispatcher: Arc<Dispatcher>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let io = TokioIo::new(stream);
        let service = DispatchService { dispatcher };

        http1::Builder::new().serve_connection(io, service).await?;

        Ok(())
    }
}

/// Service implementation for hyper
struct DispatchService {
    dispatcher: Arc<Dispatcher>,
}

impl Service<hyper::Request<Incoming>> for DispatchService {
    type Response = hyper::Response<Full<Bytes>>;
    type Error = Box<dyn std::error::Error + Send + Sync>;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
        let dispatcher = Arc::clone(&self.dispatcher);

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body_bytes = body.collect().await?.to_bytes();

            let request = Request::from_parts(
                parts.method,
                parts.uri,
                parts.version,
                parts.headers,
                body_bytes,
            );

            // Dispatch is infallible; errors were already rendered
            let response = dispatcher.dispatch(request).await;

            let mut builder = hyper::Response::builder().status(response.status);
            for (key, value) in response.headers.iter() {
                builder = builder.header(key, value);
            }

            Ok(builder.body(Full::new(response.body))?)
        })
    }
}

/// Helper function to create and run a server
///
/// # Examples
///
/// ```no_run
/// use std::net::SocketAddr;
/// use std::sync::Arc;
/// use switchyard_routing::{Dispatcher, RouteTable};
/// use switchyard_server::serve;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = Arc::new(Dispatcher::new(Arc::new(RouteTable::new())));
/// let addr: SocketAddr = "127.0.0.1:5000".parse()?;
/// serve(addr, dispatcher).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(
    addr: SocketAddr,
    dispatcher: Arc<Dispatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let server = HttpServer::new(dispatcher);
    server.listen(addr).await
}
