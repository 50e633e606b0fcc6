// RADOS Gateway Swift client library for Rust
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-process stand-in for the Swift API of a RADOS Gateway.
//!
//! Implements just enough of `/auth` and `/swift/v1` for the integration
//! tests: token issuance, containers with read/write ACLs, objects with
//! range reads and server-side copy, and listings with prefix, marker, path
//! and limit. Every request is recorded, and canned responses can be queued
//! to override the next replies verbatim.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use percent_encoding::percent_decode_str;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const DEFAULT_USER: &str = "test:tester";
pub const DEFAULT_KEY: &str = "testing";

const STORAGE_PATH: &str = "/swift/v1";

/// A request as seen by the mock server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A reply returned as is, ahead of the regular routing.
#[derive(Clone, Debug, Default)]
pub struct CannedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
    /// Sleep before the headers are written.
    pub delay: Option<Duration>,
}

impl CannedResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Default)]
struct Container {
    read_acl: Option<String>,
    write_acl: Option<String>,
    objects: BTreeMap<String, Bytes>,
}

#[derive(Debug, Default)]
struct MockState {
    users: HashMap<String, String>,
    tokens: HashSet<String>,
    containers: BTreeMap<String, Container>,
    requests: Vec<RecordedRequest>,
    canned: VecDeque<CannedResponse>,
}

/// Mock gateway listening on a random local port.
///
/// The accept loop is aborted when the server is dropped.
#[derive(Debug)]
pub struct MockSwiftServer {
    addr: SocketAddr,
    state: Arc<Mutex<MockState>>,
    handle: JoinHandle<()>,
}

impl Drop for MockSwiftServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl MockSwiftServer {
    /// Binds `127.0.0.1:0` and starts serving with the default user.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let mut state = MockState::default();
        state.users.insert(DEFAULT_USER.into(), DEFAULT_KEY.into());
        let state = Arc::new(Mutex::new(state));

        let handle = tokio::spawn(accept_loop(listener, addr, state.clone()));
        log::debug!("mock swift server listening on {addr}");

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Address suitable for [`rgw_swift::swift::http::BaseUrl`] parsing.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn storage_url(&self) -> String {
        storage_url(self.addr)
    }

    /// Queues a reply for the next request, whatever its route.
    pub fn push_response(&self, resp: CannedResponse) {
        self.lock().canned.push_back(resp);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    /// Current `(read, write)` ACL of a container.
    pub fn bucket_acl(&self, bucket: &str) -> Option<(Option<String>, Option<String>)> {
        self.lock()
            .containers
            .get(bucket)
            .map(|c| (c.read_acl.clone(), c.write_acl.clone()))
    }

    pub fn object(&self, bucket: &str, object: &str) -> Option<Bytes> {
        self.lock()
            .containers
            .get(bucket)
            .and_then(|c| c.objects.get(object).cloned())
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn storage_url(addr: SocketAddr) -> String {
    format!("http://{addr}{STORAGE_PATH}")
}

async fn accept_loop(listener: TcpListener, addr: SocketAddr, state: Arc<Mutex<MockState>>) {
    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                log::warn!("mock swift server failed to accept connection: {e}");
                continue;
            }
        };

        let state = state.clone();
        tokio::spawn(async move {
            let svc = service_fn(move |req| handle(addr, state.clone(), req));
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), svc)
                .await
            {
                log::debug!("mock swift connection from {peer_addr} ended: {e}");
            }
        });
    }
}

async fn handle(
    addr: SocketAddr,
    state: Arc<Mutex<MockState>>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => return Ok(reply(StatusCode::BAD_REQUEST, e.to_string())),
    };

    let recorded = RecordedRequest {
        method: parts.method,
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(String::from),
        headers: parts.headers,
        body,
    };

    let canned = {
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        state.requests.push(recorded.clone());
        state.canned.pop_front()
    };

    if let Some(canned) = canned {
        if let Some(delay) = canned.delay {
            tokio::time::sleep(delay).await;
        }
        return Ok(canned_reply(canned));
    }

    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    Ok(route(addr, &mut state, &recorded))
}

fn canned_reply(canned: CannedResponse) -> Response<Full<Bytes>> {
    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut resp = reply(status, canned.body);
    for (name, value) in canned.headers {
        if let (Ok(name), Ok(value)) = (
            http::HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            resp.headers_mut().append(name, value);
        }
    }
    resp
}

fn reply(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(body.into()));
    *resp.status_mut() = status;
    resp
}

fn route(addr: SocketAddr, state: &mut MockState, req: &RecordedRequest) -> Response<Full<Bytes>> {
    if req.path == "/auth" || req.path == "/auth/v1.0" {
        return authenticate(addr, state, req);
    }

    let Some(rest) = req.path.strip_prefix(STORAGE_PATH) else {
        return reply(StatusCode::NOT_FOUND, "NoSuchURL");
    };

    match req.header("x-auth-token") {
        Some(token) if state.tokens.contains(token) => {}
        _ => return reply(StatusCode::UNAUTHORIZED, "AccessDenied"),
    }

    let rest = rest.trim_start_matches('/');
    let (bucket, object) = match rest.split_once('/') {
        Some((b, o)) if !o.is_empty() => (decode(b), Some(decode(o))),
        Some((b, _)) => (decode(b), None),
        None => (decode(rest), None),
    };

    match (bucket.is_empty(), object) {
        (true, _) if req.method == Method::GET => list_account(state),
        (true, _) => reply(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed"),
        (false, None) => container_op(state, req, &bucket),
        (false, Some(object)) => object_op(state, req, &bucket, &object),
    }
}

fn authenticate(
    addr: SocketAddr,
    state: &mut MockState,
    req: &RecordedRequest,
) -> Response<Full<Bytes>> {
    let user = req.header("x-auth-user").unwrap_or_default();
    let key = req.header("x-auth-key").unwrap_or_default();

    if state.users.get(user).is_some_and(|k| k == key) {
        let token = format!("AUTH_rgwtk{}", Uuid::new_v4().simple());
        state.tokens.insert(token.clone());
        let mut resp = reply(StatusCode::NO_CONTENT, Bytes::new());
        let headers = resp.headers_mut();
        if let Ok(v) = HeaderValue::try_from(token.as_str()) {
            headers.insert("x-auth-token", v.clone());
            headers.insert("x-storage-token", v);
        }
        if let Ok(v) = HeaderValue::try_from(storage_url(addr)) {
            headers.insert("x-storage-url", v);
        }
        return resp;
    }

    let body = format!(
        r#"{{"Code":"AccessDenied","RequestId":"tx{}","HostId":"mock-swift"}}"#,
        Uuid::new_v4().simple()
    );
    reply(StatusCode::FORBIDDEN, body)
}

fn list_account(state: &MockState) -> Response<Full<Bytes>> {
    if state.containers.is_empty() {
        return reply(StatusCode::NO_CONTENT, Bytes::new());
    }
    reply(StatusCode::OK, listing(state.containers.keys()))
}

fn container_op(state: &mut MockState, req: &RecordedRequest, bucket: &str) -> Response<Full<Bytes>> {
    let read_acl = req.header("x-container-read").map(String::from);
    let write_acl = req.header("x-container-write").map(String::from);

    match req.method {
        Method::PUT => {
            let status = if state.containers.contains_key(bucket) {
                StatusCode::ACCEPTED
            } else {
                StatusCode::CREATED
            };
            let container = state.containers.entry(bucket.to_string()).or_default();
            if read_acl.is_some() {
                container.read_acl = read_acl;
            }
            if write_acl.is_some() {
                container.write_acl = write_acl;
            }
            reply(status, Bytes::new())
        }
        Method::POST => match state.containers.get_mut(bucket) {
            Some(container) => {
                if read_acl.is_some() {
                    container.read_acl = read_acl;
                }
                if write_acl.is_some() {
                    container.write_acl = write_acl;
                }
                reply(StatusCode::NO_CONTENT, Bytes::new())
            }
            None => reply(StatusCode::NOT_FOUND, "NoSuchBucket"),
        },
        Method::DELETE => match state.containers.get(bucket) {
            None => reply(StatusCode::NOT_FOUND, "NoSuchBucket"),
            Some(c) if !c.objects.is_empty() => reply(StatusCode::CONFLICT, "BucketNotEmpty"),
            Some(_) => {
                state.containers.remove(bucket);
                reply(StatusCode::NO_CONTENT, Bytes::new())
            }
        },
        Method::GET => match state.containers.get(bucket) {
            None => reply(StatusCode::NOT_FOUND, "NoSuchBucket"),
            Some(container) => list_container(container, req.query.as_deref()),
        },
        _ => reply(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed"),
    }
}

fn list_container(container: &Container, query: Option<&str>) -> Response<Full<Bytes>> {
    let params = parse_query(query);
    let prefix = params.get("prefix").map(String::as_str).unwrap_or_default();
    let marker = params.get("marker").map(String::as_str);
    let path = params.get("path").map(|p| p.trim_end_matches('/').to_string());
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(usize::MAX);

    let keys: Vec<&String> = container
        .objects
        .keys()
        .filter(|k| k.starts_with(prefix))
        .filter(|k| marker.is_none_or(|m| k.as_str() > m))
        .filter(|k| match &path {
            Some(p) if p.is_empty() => !k.contains('/'),
            Some(p) => k
                .strip_prefix(p.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|rest| !rest.is_empty() && !rest.contains('/')),
            None => true,
        })
        .take(limit)
        .collect();

    if keys.is_empty() {
        return reply(StatusCode::NO_CONTENT, Bytes::new());
    }
    reply(StatusCode::OK, listing(keys))
}

fn object_op(
    state: &mut MockState,
    req: &RecordedRequest,
    bucket: &str,
    object: &str,
) -> Response<Full<Bytes>> {
    match req.method {
        Method::PUT => {
            let data = match req.header("x-copy-from") {
                Some(src) => {
                    let src = src.trim_start_matches('/');
                    let Some((src_bucket, src_object)) = src.split_once('/') else {
                        return reply(StatusCode::PRECONDITION_FAILED, "InvalidArgument");
                    };
                    let Some(src_container) = state.containers.get(&decode(src_bucket)) else {
                        return reply(StatusCode::NOT_FOUND, "NoSuchBucket");
                    };
                    match src_container.objects.get(&decode(src_object)) {
                        Some(data) => data.clone(),
                        None => return reply(StatusCode::NOT_FOUND, "NoSuchKey"),
                    }
                }
                None => req.body.clone(),
            };

            let Some(container) = state.containers.get_mut(bucket) else {
                return reply(StatusCode::NOT_FOUND, "NoSuchBucket");
            };
            let etag = etag(&data);
            container.objects.insert(object.to_string(), data);

            let mut resp = reply(StatusCode::CREATED, Bytes::new());
            if let Ok(v) = HeaderValue::try_from(etag) {
                resp.headers_mut().insert(http::header::ETAG, v);
            }
            resp
        }
        Method::GET => {
            let Some(container) = state.containers.get(bucket) else {
                return reply(StatusCode::NOT_FOUND, "NoSuchBucket");
            };
            let Some(data) = container.objects.get(object) else {
                return reply(StatusCode::NOT_FOUND, "NoSuchKey");
            };
            match req.header("range") {
                Some(range) => ranged(data, range),
                None => {
                    let mut resp = reply(StatusCode::OK, data.clone());
                    if let Ok(v) = HeaderValue::try_from(etag(data)) {
                        resp.headers_mut().insert(http::header::ETAG, v);
                    }
                    resp
                }
            }
        }
        Method::DELETE => match state.containers.get_mut(bucket) {
            None => reply(StatusCode::NOT_FOUND, "NoSuchBucket"),
            Some(container) => match container.objects.remove(object) {
                Some(_) => reply(StatusCode::NO_CONTENT, Bytes::new()),
                None => reply(StatusCode::NOT_FOUND, "NoSuchKey"),
            },
        },
        _ => reply(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed"),
    }
}

/// Serves `bytes=start-end`, both ends inclusive, with `end` clamped.
fn ranged(data: &Bytes, range: &str) -> Response<Full<Bytes>> {
    let len = data.len() as u64;
    let bounds = range
        .strip_prefix("bytes=")
        .and_then(|r| r.split_once('-'))
        .and_then(|(s, e)| Some((s.parse::<u64>().ok()?, e.parse::<u64>().ok()?)));

    let (start, end) = match bounds {
        Some((start, end)) if start <= end && start < len => (start, end.min(len - 1)),
        _ => return reply(StatusCode::RANGE_NOT_SATISFIABLE, "InvalidRange"),
    };

    let mut resp = reply(
        StatusCode::PARTIAL_CONTENT,
        data.slice(start as usize..=end as usize),
    );
    if let Ok(v) = HeaderValue::try_from(format!("bytes {start}-{end}/{len}")) {
        resp.headers_mut().insert(http::header::CONTENT_RANGE, v);
    }
    resp
}

fn listing<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| format!("{}\n", n.as_ref()))
        .collect()
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .unwrap_or_default()
        .split('&')
        .filter(|kv| !kv.is_empty())
        .map(|kv| match kv.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(kv), String::new()),
        })
        .collect()
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Content fingerprint; stable for equal payloads.
fn etag(data: &Bytes) -> String {
    use std::hash::{DefaultHasher, Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    data.hash(&mut hasher);
    format!("\"{:016x}\"", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranged_clamps_end() {
        let data = Bytes::from_static(b"123456789abcdefghij");
        let resp = ranged(&data, "bytes=15-100");
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(
            resp.headers().get(http::header::CONTENT_RANGE).unwrap(),
            "bytes 15-18/19"
        );
        assert_eq!(
            ranged(&data, "bytes=19-20").status(),
            StatusCode::RANGE_NOT_SATISFIABLE
        );
    }

    #[test]
    fn test_parse_query_decodes() {
        let q = parse_query(Some("limit=2&prefix=a%2Fb%20c"));
        assert_eq!(q.get("limit").map(String::as_str), Some("2"));
        assert_eq!(q.get("prefix").map(String::as_str), Some("a/b c"));
    }

    #[test]
    fn test_listing_is_newline_terminated() {
        assert_eq!(listing(["a", "b"]), "a\nb\n");
    }
}
