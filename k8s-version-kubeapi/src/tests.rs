use http::{Request, Response, StatusCode};
use kube::client::Body;
use serde_json::json;
use tower_test::mock;

use k8s::InfoExt as _;
use k8s::ServerVersion;

use super::*;

type ApiServerHandle = mock::Handle<Request<Body>, Response<Body>>;

fn mock_api() -> (KubeApi, ApiServerHandle) {
    let (service, handle) = mock::pair::<Request<Body>, Response<Body>>();
    let client = kube::Client::new(service, "default");
    (KubeApi::with_client(client), handle)
}

async fn respond(mut handle: ApiServerHandle, status: StatusCode, body: Vec<u8>) {
    let (request, send) = handle.next_request().await.expect("service not called");
    assert_eq!(request.method(), http::Method::GET);
    assert_eq!(request.uri().path(), "/version");
    let response = Response::builder()
        .status(status)
        .body(Body::from(body))
        .unwrap();
    send.send_response(response);
}

fn info_body(git_version: &str) -> Vec<u8> {
    let info = version::Info::with_git_version(git_version);
    serde_json::to_vec(&info).unwrap()
}

async fn discover<S: ServerVersion>(source: &S) -> Result<String, S::Error> {
    source.server_version().await
}

#[tokio::test]
async fn git_version_is_read_from_version_endpoint() {
    let (api, handle) = mock_api();
    let server = tokio::spawn(respond(
        handle,
        StatusCode::OK,
        info_body("v1.30.2-aliyun.1"),
    ));

    let version = api.git_version().await.unwrap();
    assert_eq!(version, "v1.30.2-aliyun.1");
    server.await.unwrap();
}

#[tokio::test]
async fn info_carries_major_and_minor() {
    let (api, handle) = mock_api();
    let server = tokio::spawn(respond(handle, StatusCode::OK, info_body("v1.31.4")));

    let info = api.info().await.unwrap();
    assert_eq!(info.major, "1");
    assert_eq!(info.minor, "31");
    server.await.unwrap();
}

#[tokio::test]
async fn server_version_goes_through_the_trait() {
    let (api, handle) = mock_api();
    let server = tokio::spawn(respond(handle, StatusCode::OK, info_body("v1.33.3")));

    assert_eq!(discover(&api).await.unwrap(), "v1.33.3");
    server.await.unwrap();
}

#[tokio::test]
async fn server_errors_are_returned() {
    let (api, handle) = mock_api();
    let status = json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": "etcdserver: request timed out",
        "reason": "InternalError",
        "code": 500
    });
    let body = serde_json::to_vec(&status).unwrap();
    let server = tokio::spawn(respond(handle, StatusCode::INTERNAL_SERVER_ERROR, body));

    assert!(discover(&api).await.is_err());
    server.await.unwrap();
}

#[tokio::test]
async fn debug_redacts_client() {
    let (api, _handle) = mock_api();
    let text = format!("{api:?}");
    assert!(text.contains("<kube::Client>"));
}
