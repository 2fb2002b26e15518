// ABOUTME: In-process fake Nexus REST server built on hyper.
// ABOUTME: Serves canned search pages and repositories, checks basic auth, records requests.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const LOGIN: &str = "admin";
pub const PASSWORD: &str = "secret";
/// `admin:secret`, base64 encoded.
const EXPECTED_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// A request as the server saw it, with the query already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Default)]
pub struct Routes {
    /// Body for `GET /service/rest/v1/repositories`.
    pub repositories: String,
    /// Search bodies keyed by `(repository, continuationToken)`; "" is the first page.
    pub search: HashMap<(String, String), (u16, String)>,
    /// Status returned by `DELETE /service/rest/v1/assets/{id}`; 204 when absent.
    pub delete_status: HashMap<String, u16>,
}

struct State {
    routes: Routes,
    requests: Mutex<Vec<Recorded>>,
}

pub struct FakeNexus {
    pub url: String,
    state: Arc<State>,
}

impl FakeNexus {
    pub async fn start(routes: Routes) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(State {
            routes,
            requests: Mutex::new(Vec::new()),
        });

        let server_state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let state = Arc::clone(&server_state);
                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { Ok::<_, Infallible>(state.handle(req)) }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::DELETE)
            .map(|r| r.path.trim_start_matches("/service/rest/v1/assets/").to_string())
            .collect()
    }
}

impl State {
    fn handle(&self, req: Request<Incoming>) -> Response<Full<Bytes>> {
        let query: HashMap<String, String> = req
            .uri()
            .query()
            .unwrap_or_default()
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (decode(k), decode(v)))
            .collect();
        let path = decode(req.uri().path());

        self.requests.lock().push(Recorded {
            method: req.method().clone(),
            path: path.clone(),
            query: query.clone(),
        });

        let authorized = req
            .headers()
            .get(hyper::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            == Some(EXPECTED_AUTH);
        if !authorized {
            return respond(401, "");
        }

        match (req.method(), path.as_str()) {
            (&Method::GET, "/service/rest/v1/repositories") => {
                respond(200, &self.routes.repositories)
            }
            (&Method::GET, "/service/rest/v1/search") => {
                let repository = query.get("repository").cloned().unwrap_or_default();
                let token = query.get("continuationToken").cloned().unwrap_or_default();
                match self.routes.search.get(&(repository, token)) {
                    Some((status, body)) => respond(*status, body),
                    None => respond(404, "no such page"),
                }
            }
            (&Method::DELETE, p) if p.starts_with("/service/rest/v1/assets/") => {
                let id = p.trim_start_matches("/service/rest/v1/assets/");
                let status = self.routes.delete_status.get(id).copied().unwrap_or(204);
                respond(status, "")
            }
            _ => respond(404, "not found"),
        }
    }
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

fn respond(status: u16, body: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
